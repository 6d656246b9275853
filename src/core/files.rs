/// Expands the input-file pattern into an ordered list of paths.
///
/// A pattern that matches nothing (or does not parse as a glob) degrades
/// to the literal pattern string; gnuplot reports the missing file itself,
/// so no existence check happens here.
pub fn expand(pattern: &str) -> Vec<String> {
    let matched: Vec<String> = match glob::glob(pattern) {
        Ok(paths) => paths
            .filter_map(Result::ok)
            .map(|path| path.display().to_string())
            .collect(),
        Err(_) => Vec::new(),
    };

    if matched.is_empty() {
        vec![pattern.to_string()]
    } else {
        matched
    }
}
