use random_username::utils::{logger, validation::Validate};
use random_username::{
    load_word_list, AppConfig, LineConsole, LocalStorage, RngSource, UsernameEngine,
    UsernameGenerator, WordList, DEFAULT_ADJECTIVES, DEFAULT_NOUNS,
};

fn main() -> anyhow::Result<()> {
    logger::init_cli_logger();

    let config = AppConfig::default();
    config.validate()?;
    tracing::debug!("Config: {:?}", config);

    let mut console = LineConsole::stdio();

    let adjectives = load_word_list(
        &config.adjectives_path,
        &WordList::from_defaults(&DEFAULT_ADJECTIVES),
        &mut console,
    );
    let nouns = load_word_list(
        &config.nouns_path,
        &WordList::from_defaults(&DEFAULT_NOUNS),
        &mut console,
    );

    let generator = UsernameGenerator::new(adjectives, nouns);
    let engine = UsernameEngine::new(generator, LocalStorage::new(&config.output_path));
    let mut rng = RngSource::thread();

    match engine.run(&mut console, &mut rng) {
        Ok(report) => {
            tracing::info!(
                "Run finished: {} usernames, saved: {}",
                report.usernames.len(),
                report.saved
            );
            Ok(())
        }
        Err(e) => {
            tracing::error!("Username generation aborted: {}", e);
            eprintln!("{}", e.user_friendly_message());
            std::process::exit(1);
        }
    }
}
