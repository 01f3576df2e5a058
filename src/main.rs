fn main() {
    filenav::app::cli::run();
}
