use kurtakip::cli;

fn main() {
    cli::run();
}
