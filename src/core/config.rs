use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlotMode {
    TwoD,
    ThreeD,
}

impl PlotMode {
    pub fn keyword(self) -> &'static str {
        match self {
            PlotMode::TwoD => "plot",
            PlotMode::ThreeD => "splot",
        }
    }
}

/// Output target for gnuplot. Only one is active; the last terminal
/// flag on the command line wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Terminal {
    Interactive,
    Eps,
    Png,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Pause {
    /// Hold the window open until the user closes it.
    Interactive,
    /// Redraw from updated input every `FREQ` seconds.
    Replot(String),
}

/// One `set ...` line whose position in the script equals the position
/// of its flag on the command line. Values are interpolated verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Directive {
    Grid,
    LogscaleX,
    LogscaleY,
    Output(String),
    Title(String),
    XLabel(String),
    YLabel(String),
    ZLabel(String),
    XRange(String),
    YRange(String),
    ZRange(String),
}

#[derive(Debug, Clone)]
pub struct Config {
    pub mode: PlotMode,
    pub autotitle: bool,
    pub terminal: Terminal,
    pub pause: Option<Pause>,
    pub for_expr: Option<String>,
    pub save_script: Option<PathBuf>,
    pub raise: bool,
    pub read_stdin: bool,
    pub directives: Vec<Directive>,
    pub pattern: Option<String>,
    pub trailing: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            mode: PlotMode::TwoD,
            autotitle: false,
            terminal: Terminal::Interactive,
            pause: None,
            for_expr: None,
            save_script: None,
            raise: false,
            read_stdin: false,
            directives: Vec::new(),
            pattern: None,
            trailing: Vec::new(),
        }
    }
}
