use std::path::PathBuf;

use crate::core::config::{Config, Directive, Pause, PlotMode, Terminal};
use crate::core::error::GplotError;

pub const USAGE: &str = "\
Usage: gplot [OPTIONS] FILE-PATTERN [PLOT-ARGS...]

Plot data files with gnuplot. FILE-PATTERN is a glob; every match gets
its own plot clause, decorated with the PLOT-ARGS verbatim.

Options:
  -3            3D plot (splot)
  -c            derive series titles automatically (column headers)
  -e FILE       EPS output to FILE instead of a window
  -f FOREXPR    wrap each clause in `for [FOREXPR]`
  -g            draw a grid
  -h            show this help and exit
  -i            keep the window open until closed
  -l            logarithmic y axis
  -p FILE       PNG output to FILE instead of a window
  -r            raise the plot window
  -s FILE       save the generated script to FILE (executable)
  -t TITLE      plot title
  -x LABEL      x axis label        -X LOW:HIGH   x axis range
  -y LABEL      y axis label        -Y LOW:HIGH   y axis range
  -z LABEL      z axis label        -Z LOW:HIGH   z axis range
  -F FREQ       replot from the input every FREQ seconds
  -L            logarithmic x axis
  -S            read extra gnuplot commands from standard input

Unknown options are ignored. Later options override earlier ones where
they conflict; -e and -p cancel a pending -i or -F.";

#[derive(Debug)]
pub enum Invocation {
    Help,
    Plot(Config),
}

/// Folds argv (program name already stripped) into a `Config`.
///
/// Flags are consumed left to right until `--` or the first non-flag
/// token; what remains is the file pattern plus trailing plot-clause
/// arguments. Repeated conflicting flags are last-wins, and settings
/// that become script lines keep their command-line order.
pub fn parse_args<I>(args: I) -> Result<Invocation, GplotError>
where
    I: IntoIterator<Item = String>,
{
    let mut config = Config::default();
    let mut args = args.into_iter();
    let mut positionals: Vec<String> = Vec::new();

    while let Some(arg) = args.next() {
        if arg == "--" {
            positionals.extend(args);
            break;
        }
        if !arg.starts_with('-') || arg == "-" {
            positionals.push(arg);
            positionals.extend(args);
            break;
        }

        match arg.as_str() {
            "-3" => config.mode = PlotMode::ThreeD,
            "-c" => config.autotitle = true,
            "-e" => {
                let file = value(&mut args, 'e')?;
                config.terminal = Terminal::Eps;
                config.pause = None;
                config.directives.push(Directive::Output(file));
            }
            "-f" => config.for_expr = Some(value(&mut args, 'f')?),
            "-g" => config.directives.push(Directive::Grid),
            "-h" => return Ok(Invocation::Help),
            "-i" => config.pause = Some(Pause::Interactive),
            "-l" => config.directives.push(Directive::LogscaleY),
            "-p" => {
                let file = value(&mut args, 'p')?;
                config.terminal = Terminal::Png;
                config.pause = None;
                config.directives.push(Directive::Output(file));
            }
            "-r" => config.raise = true,
            "-s" => config.save_script = Some(PathBuf::from(value(&mut args, 's')?)),
            "-t" => {
                let title = value(&mut args, 't')?;
                config.directives.push(Directive::Title(title));
            }
            "-x" => {
                let label = value(&mut args, 'x')?;
                config.directives.push(Directive::XLabel(label));
            }
            "-y" => {
                let label = value(&mut args, 'y')?;
                config.directives.push(Directive::YLabel(label));
            }
            "-z" => {
                let label = value(&mut args, 'z')?;
                config.directives.push(Directive::ZLabel(label));
            }
            "-F" => {
                let freq = value(&mut args, 'F')?;
                config.pause = Some(Pause::Replot(freq));
            }
            "-L" => config.directives.push(Directive::LogscaleX),
            "-S" => config.read_stdin = true,
            "-X" => {
                let range = value(&mut args, 'X')?;
                config.directives.push(Directive::XRange(range));
            }
            "-Y" => {
                let range = value(&mut args, 'Y')?;
                config.directives.push(Directive::YRange(range));
            }
            "-Z" => {
                let range = value(&mut args, 'Z')?;
                config.directives.push(Directive::ZRange(range));
            }
            _ => {}
        }
    }

    let mut positionals = positionals.into_iter();
    config.pattern = positionals.next();
    config.trailing = positionals.collect();

    Ok(Invocation::Plot(config))
}

fn value<I>(args: &mut I, flag: char) -> Result<String, GplotError>
where
    I: Iterator<Item = String>,
{
    args.next().ok_or(GplotError::MissingValue { flag })
}
