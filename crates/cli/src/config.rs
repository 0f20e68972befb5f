// crates/cli/src/config.rs
use crate::args::Args;
pub use letter_counter_engine::config::Config;
use letter_counter_engine::media::TEXT_PLAIN;
use std::time::Duration;

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        let allowed_types = if args.allow_types.is_empty() {
            vec![TEXT_PLAIN.to_string()]
        } else {
            args.allow_types
        };

        Self {
            file: args.file,
            letters: args.letters,
            allowed_types,
            format: args.format.into(),
            show_preview: !args.no_preview,
            watch: args.watch,
            watch_interval: Duration::from_secs(args.watch_interval),
        }
    }
}
