use sentiq_store::{load_theme, save_theme, Paths, Theme};

pub fn run(name: Option<&str>) -> anyhow::Result<()> {
    let paths = Paths::new()?;
    let theme_file = paths.theme_file();

    match name {
        None => println!("Theme: {}", load_theme(&theme_file)),
        Some(value) => {
            let theme = Theme::parse(value)
                .ok_or_else(|| anyhow::anyhow!("unknown theme {value:?} (use light or dark)"))?;
            save_theme(&theme_file, theme)?;
            println!("Theme set to {theme}");
        }
    }
    Ok(())
}
