use trackshelf::config::LoggingSettings;

pub fn init(settings: &LoggingSettings) {
    let mut clog = colog::default_builder();
    clog.filter(None, settings.level.to_level_filter());
    // A logger may already be installed (e.g. when run from tests).
    let _ = clog.try_init();
}
