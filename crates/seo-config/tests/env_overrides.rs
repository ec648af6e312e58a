use figment::Jail;
use pretty_assertions::assert_eq;
use seo_config::SeoConfig;

#[test]
fn env_vars_fill_nested_sections() {
    Jail::expect_with(|jail| {
        jail.set_env("SEOGRAPH_SITE__BASE_URL", "https://env.example");
        jail.set_env("SEOGRAPH_RULES__REQUIRE_CONTACT_POINT", "true");
        jail.set_env("SEOGRAPH_RICH_RESULTS__TIMEOUT_MS", "250");

        let config = SeoConfig::load().expect("config loads");
        assert_eq!(config.site.base_url.as_deref(), Some("https://env.example"));
        assert!(config.rules.require_contact_point);
        assert_eq!(config.rich_results.timeout_ms, 250);
        Ok(())
    });
}

#[test]
fn env_beats_project_file() {
    Jail::expect_with(|jail| {
        jail.create_dir(".seograph")?;
        jail.create_file(
            ".seograph/config.toml",
            r"
[rules]
max_name_length = 80
",
        )?;
        jail.set_env("SEOGRAPH_RULES__MAX_NAME_LENGTH", "60");

        let config = SeoConfig::load().expect("config loads");
        assert_eq!(config.rules.max_name_length, 60);
        Ok(())
    });
}
