// SPDX-License-Identifier: MPL-2.0
use category_lens::app::{self, paths, Flags};
use category_lens::ui::theming::ThemeMode;

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    let theme: Option<ThemeMode> = match args.opt_value_from_str("--theme") {
        Ok(theme) => theme,
        Err(err) => {
            eprintln!("invalid --theme value: {err} (expected light, dark or system)");
            std::process::exit(2);
        }
    };
    let config_dir: Option<String> = match args.opt_value_from_str("--config-dir") {
        Ok(dir) => dir,
        Err(err) => {
            eprintln!("invalid --config-dir value: {err}");
            std::process::exit(2);
        }
    };

    paths::init_cli_overrides(config_dir);

    app::run(Flags { theme })
}
