use fireworks_canvas::window_engine::resolution::DEFAULT_SCREEN_MARGIN;
use fireworks_canvas::window_engine::{Resolution, WindowConfig};

#[test]
fn test_nominal_dimensions() {
    let expected = [
        (Resolution::P360, (800, 600)),
        (Resolution::Hd, (1280, 720)),
        (Resolution::FullHd, (1920, 1080)),
        (Resolution::K2, (2560, 1440)),
        (Resolution::K4, (3840, 2160)),
    ];
    for (resolution, dims) in expected {
        assert_eq!(resolution.dimensions(), dims, "{}", resolution);
    }
    assert_eq!(Resolution::default(), Resolution::Hd);
}

#[test]
fn test_fit_to_large_screen_keeps_nominal_size() {
    assert_eq!(
        Resolution::P360.fit_to_screen(Some((900, 700)), DEFAULT_SCREEN_MARGIN),
        (800, 600)
    );
    assert_eq!(
        Resolution::FullHd.fit_to_screen(Some((3840, 2160)), DEFAULT_SCREEN_MARGIN),
        (1920, 1080)
    );
}

#[test]
fn test_fit_to_small_screen_clamps_each_axis() {
    assert_eq!(
        Resolution::K4.fit_to_screen(Some((1920, 1080)), DEFAULT_SCREEN_MARGIN),
        (1870, 1030)
    );
    // Un seul axe dépasse
    assert_eq!(
        Resolution::Hd.fit_to_screen(Some((2000, 700)), DEFAULT_SCREEN_MARGIN),
        (1280, 650)
    );
    assert_eq!(Resolution::Hd.fit_to_screen(Some((10, 10)), 50), (0, 0));
}

#[test]
fn test_fit_without_screen_uses_nominal_size() {
    assert_eq!(
        Resolution::K2.fit_to_screen(None, DEFAULT_SCREEN_MARGIN),
        (2560, 1440)
    );
}

#[test]
fn test_parse_names() {
    assert_eq!("360P".parse::<Resolution>().unwrap(), Resolution::P360);
    assert_eq!("fullhd".parse::<Resolution>().unwrap(), Resolution::FullHd);
    assert_eq!(" 4k ".parse::<Resolution>().unwrap(), Resolution::K4);

    let err = "8K".parse::<Resolution>().unwrap_err();
    assert!(err.to_string().contains("360P, HD, FULLHD, 2K, 4K"));

    assert_eq!(Resolution::from_name_or_default("8K"), Resolution::Hd);

    for r in Resolution::ALL {
        assert_eq!(r.to_string().parse::<Resolution>().unwrap(), r);
    }
}

#[test]
fn test_shortcuts() {
    assert_eq!(Resolution::from_shortcut(1), Some(Resolution::P360));
    assert_eq!(Resolution::from_shortcut(5), Some(Resolution::K4));
    assert_eq!(Resolution::from_shortcut(0), None);
    assert_eq!(Resolution::from_shortcut(6), None);
}

#[test]
fn test_window_config_from_toml() {
    let config: WindowConfig = toml::from_str(
        r#"
        resolution = "2K"
        screen_margin = 80
        "#,
    )
    .unwrap();

    assert_eq!(config.resolution, Resolution::K2);
    assert_eq!(config.screen_margin, 80);
    assert_eq!(config.title, WindowConfig::default().title);
    assert!(config.center_on_screen);
}
