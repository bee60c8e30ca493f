fn main() {
    codab::app::cli::run();
}
