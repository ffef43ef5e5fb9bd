fn main() {
    env_logger::Builder::from_env(
        env_logger::Env::new().filter_or("CHESS_REFEREE_LOG", "warn"),
    )
    .init();
    log::info!("chess referee starting");
    chess_referee::mock::run_interactive_terminal();
}
