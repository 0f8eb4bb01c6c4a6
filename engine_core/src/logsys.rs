use std::io::Write;

/// Initializes the process-wide logger.
///
/// `RUST_LOG` overrides the default `info` filter. Safe to call once from
/// the binary before the engine starts.
pub fn init() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] [{}] {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}
