fn main() {
    veo_prompt::app::cli::run();
}
