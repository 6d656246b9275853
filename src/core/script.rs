use crate::core::config::{Config, Directive, Pause, PlotMode, Terminal};

const SHEBANG: &str = "#!/usr/bin/env gnuplot";

/// The rendered gnuplot script. The pause block is kept apart from the
/// body so a saved copy can omit it while the executed script keeps it.
#[derive(Debug, Clone)]
pub struct Script {
    body: Vec<String>,
    pause: Vec<String>,
}

impl Script {
    /// Full text handed to gnuplot, pause block included.
    pub fn text(&self) -> String {
        let mut out = self.body.join("\n");
        for line in &self.pause {
            out.push('\n');
            out.push_str(line);
        }
        out.push('\n');
        out
    }

    /// Standalone copy for `-s`: shebang first, no pause directive.
    pub fn saveable_text(&self) -> String {
        let mut out = String::from(SHEBANG);
        for line in &self.body {
            out.push('\n');
            out.push_str(line);
        }
        out.push('\n');
        out
    }
}

/// Renders the script from the parsed configuration, the expanded file
/// list and (for `-S`) text already read from standard input. Emission
/// order is fixed: terminal, settings in flag order, key mode, stdin
/// splice, plot statement; the pause block trails everything else.
pub fn render(
    config: &Config,
    files: &[String],
    stdin_text: Option<&str>,
    invocation: &str,
) -> Script {
    let mut body = Vec::new();

    body.push(terminal_line(config, invocation));

    for directive in &config.directives {
        body.push(directive_line(directive));
    }

    body.push(key_line(config, files));

    if let Some(text) = stdin_text {
        for line in text.lines() {
            body.push(line.to_string());
        }
    }

    body.extend(plot_statement(config, files));

    Script {
        body,
        pause: pause_block(config.pause.as_ref()),
    }
}

fn terminal_line(config: &Config, invocation: &str) -> String {
    match config.terminal {
        Terminal::Interactive => {
            let stamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S");
            format!("set terminal qt persist noenhanced title \"{stamp}  {invocation}\"")
        }
        Terminal::Eps => "set terminal postscript eps enhanced color".to_string(),
        Terminal::Png => "set terminal png".to_string(),
    }
}

fn directive_line(directive: &Directive) -> String {
    match directive {
        Directive::Grid => "set grid".to_string(),
        Directive::LogscaleX => "set logscale x".to_string(),
        Directive::LogscaleY => "set logscale y".to_string(),
        Directive::Output(file) => format!("set output {}", quote(file)),
        Directive::Title(title) => format!("set title \"{title}\" noenhanced"),
        Directive::XLabel(label) => format!("set xlabel \"{label}\""),
        Directive::YLabel(label) => format!("set ylabel \"{label}\""),
        Directive::ZLabel(label) => format!("set zlabel \"{label}\""),
        Directive::XRange(range) => format!("set xrange [{range}]"),
        Directive::YRange(range) => format!("set yrange [{range}]"),
        Directive::ZRange(range) => format!("set zrange [{range}]"),
    }
}

fn key_line(config: &Config, files: &[String]) -> String {
    if !config.autotitle {
        return "set key noautotitle".to_string();
    }
    if files.len() == 1 && config.mode == PlotMode::TwoD {
        "set key autotitle columnheader".to_string()
    } else {
        "set key autotitle".to_string()
    }
}

/// One clause per file, joined with line continuations so the whole
/// statement is a single logical gnuplot command.
fn plot_statement(config: &Config, files: &[String]) -> Vec<String> {
    let mut lines = vec![format!("{} \\", config.mode.keyword())];

    let for_clause = config
        .for_expr
        .as_ref()
        .map(|expr| format!("for [{expr}] "))
        .unwrap_or_default();
    let trailing = if config.trailing.is_empty() {
        String::new()
    } else {
        format!(" {}", config.trailing.join(" "))
    };

    for (index, file) in files.iter().enumerate() {
        let clause = format!("  {for_clause}{}{trailing}", quote(file));
        if index + 1 < files.len() {
            lines.push(format!("{clause}, \\"));
        } else {
            lines.push(clause);
        }
    }

    lines
}

fn pause_block(pause: Option<&Pause>) -> Vec<String> {
    match pause {
        None => Vec::new(),
        Some(Pause::Interactive) => vec!["pause mouse close".to_string()],
        Some(Pause::Replot(freq)) => vec![
            format!("pause {freq}"),
            "replot".to_string(),
            "reread".to_string(),
        ],
    }
}

/// Single-quotes a path for gnuplot; embedded quotes are doubled.
fn quote(path: &str) -> String {
    format!("'{}'", path.replace('\'', "''"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn files(names: &[&str]) -> Vec<String> {
        names.iter().map(|name| name.to_string()).collect()
    }

    fn rendered_lines(config: &Config, files: &[String]) -> Vec<String> {
        render(config, files, None, "gplot")
            .text()
            .lines()
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn directives_appear_once_each_in_parse_order() {
        let config = Config {
            directives: vec![
                Directive::Grid,
                Directive::YRange(":100".to_string()),
                Directive::Title("load".to_string()),
                Directive::LogscaleY,
            ],
            ..Config::default()
        };

        let lines = rendered_lines(&config, &files(&["a.dat"]));
        let settings: Vec<&String> = lines
            .iter()
            .filter(|line| {
                line.starts_with("set ")
                    && !line.starts_with("set terminal")
                    && !line.starts_with("set key")
            })
            .collect();

        assert_eq!(
            settings,
            vec![
                "set grid",
                "set yrange [:100]",
                "set title \"load\" noenhanced",
                "set logscale y",
            ]
        );
    }

    #[test]
    fn one_clause_per_file_with_identical_trailing() {
        let config = Config {
            trailing: vec!["using".to_string(), "1:2".to_string()],
            ..Config::default()
        };

        let lines = rendered_lines(&config, &files(&["a.dat", "b.dat", "c.dat"]));
        let start = lines.iter().position(|line| line == "plot \\").unwrap();

        assert_eq!(lines[start + 1], "  'a.dat' using 1:2, \\");
        assert_eq!(lines[start + 2], "  'b.dat' using 1:2, \\");
        assert_eq!(lines[start + 3], "  'c.dat' using 1:2");
        assert_eq!(lines.len(), start + 4);
    }

    #[test]
    fn for_expression_prefixes_every_clause() {
        let config = Config {
            for_expr: Some("i=2:5".to_string()),
            trailing: vec!["u".to_string(), "1:i".to_string()],
            ..Config::default()
        };

        let lines = rendered_lines(&config, &files(&["a.dat", "b.dat"]));
        assert!(lines.contains(&"  for [i=2:5] 'a.dat' u 1:i, \\".to_string()));
        assert!(lines.contains(&"  for [i=2:5] 'b.dat' u 1:i".to_string()));
    }

    #[test]
    fn autotitle_single_file_2d_uses_columnheader() {
        let config = Config {
            autotitle: true,
            ..Config::default()
        };
        let lines = rendered_lines(&config, &files(&["a.dat"]));
        assert!(lines.contains(&"set key autotitle columnheader".to_string()));
    }

    #[test]
    fn autotitle_many_files_is_generic() {
        let config = Config {
            autotitle: true,
            ..Config::default()
        };
        let lines = rendered_lines(&config, &files(&["a.dat", "b.dat"]));
        assert!(lines.contains(&"set key autotitle".to_string()));
        assert!(!lines.contains(&"set key autotitle columnheader".to_string()));
    }

    #[test]
    fn autotitle_3d_is_generic() {
        let config = Config {
            autotitle: true,
            mode: PlotMode::ThreeD,
            ..Config::default()
        };
        let lines = rendered_lines(&config, &files(&["a.dat"]));
        assert!(lines.contains(&"set key autotitle".to_string()));
        assert!(lines.iter().any(|line| line == "splot \\"));
    }

    #[test]
    fn no_autotitle_disables_key_titles() {
        let lines = rendered_lines(&Config::default(), &files(&["a.dat"]));
        assert!(lines.contains(&"set key noautotitle".to_string()));
    }

    #[test]
    fn eps_terminal_and_output_directive() {
        let config = Config {
            terminal: Terminal::Eps,
            directives: vec![Directive::Output("out.eps".to_string())],
            ..Config::default()
        };
        let lines = rendered_lines(&config, &files(&["a.dat"]));
        assert_eq!(lines[0], "set terminal postscript eps enhanced color");
        assert_eq!(lines[1], "set output 'out.eps'");
    }

    #[test]
    fn stdin_text_is_spliced_before_plot_statement() {
        let config = Config::default();
        let script = render(
            &config,
            &files(&["a.dat"]),
            Some("set style data lines\nset tics out\n"),
            "gplot",
        );
        let text = script.text();
        let style = text.find("set style data lines").unwrap();
        let tics = text.find("set tics out").unwrap();
        let plot = text.find("plot \\").unwrap();
        assert!(style < tics && tics < plot);
    }

    #[test]
    fn saveable_text_has_shebang_and_no_pause() {
        let config = Config {
            pause: Some(Pause::Interactive),
            ..Config::default()
        };
        let script = render(&config, &files(&["a.dat"]), None, "gplot");

        assert!(script.text().ends_with("pause mouse close\n"));

        let saved = script.saveable_text();
        assert!(saved.starts_with("#!/usr/bin/env gnuplot\n"));
        assert!(!saved.contains("pause"));
    }

    #[test]
    fn replot_pause_emits_reread_loop() {
        let config = Config {
            pause: Some(Pause::Replot("5".to_string())),
            ..Config::default()
        };
        let text = render(&config, &files(&["a.dat"]), None, "gplot").text();
        assert!(text.ends_with("pause 5\nreplot\nreread\n"));
    }

    #[test]
    fn paths_with_quotes_are_escaped() {
        let lines = rendered_lines(&Config::default(), &files(&["it's.dat"]));
        assert!(lines.iter().any(|line| line.contains("'it''s.dat'")));
    }

    #[test]
    fn interactive_terminal_titles_with_invocation() {
        let script = render(
            &Config::default(),
            &files(&["a.dat"]),
            None,
            "gplot -g '*.dat'",
        );
        let text = script.text();
        let first = text.lines().next().unwrap();
        assert!(first.starts_with("set terminal qt persist noenhanced title \""));
        assert!(first.contains("gplot -g '*.dat'"));
    }
}
