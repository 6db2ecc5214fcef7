fn main() {
    advent_scaffold::app::cli::run();
}
