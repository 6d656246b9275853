mod cli;
mod core;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let invocation = match cli::parse_args(args) {
        Ok(invocation) => invocation,
        Err(err) => {
            eprintln!("gplot: {err}");
            eprintln!("{}", cli::USAGE);
            std::process::exit(err.exit_code());
        }
    };

    match invocation {
        cli::Invocation::Help => println!("{}", cli::USAGE),
        cli::Invocation::Plot(config) => {
            if let Err(err) = core::run(config) {
                eprintln!("gplot: {err}");
                std::process::exit(err.exit_code());
            }
        }
    }
}
