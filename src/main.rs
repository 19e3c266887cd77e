use pico_args;
use qrs_landing::app::{self, Flags};

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    let flags = Flags {
        lang: args.opt_value_from_str("--lang").unwrap_or(None),
        config_dir: args.opt_value_from_str("--config-dir").unwrap_or(None),
    };

    app::run(flags)
}
