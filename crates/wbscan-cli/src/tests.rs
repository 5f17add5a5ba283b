use super::*;

#[test]
fn parses_db_ping_command() {
    let cli = Cli::try_parse_from(["wbscan-cli", "db", "ping"]).expect("expected valid cli args");

    assert!(matches!(
        cli.command,
        Some(Commands::Db {
            command: DbCommands::Ping
        })
    ));
}

#[test]
fn parses_db_migrate_command() {
    let cli =
        Cli::try_parse_from(["wbscan-cli", "db", "migrate"]).expect("expected valid cli args");

    assert!(matches!(
        cli.command,
        Some(Commands::Db {
            command: DbCommands::Migrate
        })
    ));
}

#[test]
fn no_command_is_none() {
    let cli = Cli::try_parse_from(["wbscan-cli"]).expect("expected valid cli args");
    assert!(cli.command.is_none());
}

#[test]
fn scrape_uses_default_price_bounds() {
    let cli = Cli::try_parse_from([
        "wbscan-cli",
        "scrape",
        "--url",
        "https://www.wildberries.ru/catalog/sport/velosipedy",
    ])
    .unwrap();

    match cli.command {
        Some(Commands::Scrape {
            url,
            low_price,
            top_price,
            discount,
        }) => {
            assert_eq!(url, "https://www.wildberries.ru/catalog/sport/velosipedy");
            assert_eq!(low_price, 1);
            assert_eq!(top_price, 1_000_000);
            assert!(discount.is_none());
        }
        other => panic!("expected scrape command, got {other:?}"),
    }
}

#[test]
fn scrape_accepts_filters() {
    let cli = Cli::try_parse_from([
        "wbscan-cli",
        "scrape",
        "--url",
        "/catalog/sport/velosipedy",
        "--low-price",
        "5000",
        "--top-price",
        "20000",
        "--discount",
        "15",
    ])
    .unwrap();

    assert!(matches!(
        cli.command,
        Some(Commands::Scrape {
            low_price: 5000,
            top_price: 20000,
            discount: Some(15),
            ..
        })
    ));
}

#[test]
fn scrape_requires_url() {
    let result = Cli::try_parse_from(["wbscan-cli", "scrape"]);
    assert!(result.is_err(), "scrape without --url should be rejected");
}

#[test]
fn scrape_rejects_negative_price() {
    let result = Cli::try_parse_from(["wbscan-cli", "scrape", "--url", "/x", "--low-price", "-1"]);
    assert!(result.is_err(), "negative price should be rejected");
}

#[test]
fn report_defaults_to_ten_brands() {
    let cli = Cli::try_parse_from(["wbscan-cli", "report"]).unwrap();
    assert!(matches!(
        cli.command,
        Some(Commands::Report { top_brands: 10 })
    ));
}

#[test]
fn report_accepts_top_brands() {
    let cli = Cli::try_parse_from(["wbscan-cli", "report", "--top-brands", "3"]).unwrap();
    assert!(matches!(cli.command, Some(Commands::Report { top_brands: 3 })));
}

#[test]
fn report_rejects_non_positive_top_brands() {
    for value in ["0", "-3"] {
        let result = Cli::try_parse_from(["wbscan-cli", "report", "--top-brands", value]);
        assert!(result.is_err(), "--top-brands {value} should be rejected");
    }
}
