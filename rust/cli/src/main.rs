fn main() {
    pokersim_cli::logging::init_logging();
    let mut out = std::io::stdout();
    let mut err = std::io::stderr();
    let code = pokersim_cli::run(std::env::args(), &mut out, &mut err);
    std::process::exit(code);
}
