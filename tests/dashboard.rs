use chrono::NaiveDate;
use rand::SeedableRng;
use rand::rngs::StdRng;

use cricket_dashboard::dashboard::{ProfileCard, TITLE, render_dashboard};
use cricket_dashboard::export::{read_csv, write_csv};
use cricket_dashboard::generator::generate_with;
use cricket_dashboard::summary::CareerSummary;

fn render_for(name: &str) -> (CareerSummary, String) {
    let mut rng = StdRng::seed_from_u64(8);
    let records = generate_with(name, NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(), &mut rng);
    let summary = CareerSummary::from_records(&records);
    let html = render_dashboard(&summary, &ProfileCard::from_profile(&records[0].profile));
    (summary, html)
}

#[test]
fn dashboard_has_every_panel() {
    let (summary, html) = render_for("Tilak Varma");
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains(TITLE));
    for label in [
        "Total Runs",
        "Highest Score",
        "Matches Played",
        "Batting Avg",
        "Strike Rate",
        "50s",
        "Yearly Performance",
    ] {
        assert!(html.contains(label), "missing {label}");
    }
    assert!(html.contains("Middle-order Batsman"));
    assert!(html.contains("Tilak_Varma_in_2023.jpg"));
    assert!(html.contains(&format!(">{}</div>", summary.total_runs)));
    assert!(html.contains(&format!(">{}</div>", summary.matches_played)));
    assert_eq!(html.matches("class=\"bar\"").count(), summary.yearly.len());
    assert!(html.contains("id=\"career-summary\""));
}

#[test]
fn dashboard_is_self_contained() {
    let (_, html) = render_for("Unknown Player X");
    assert!(!html.contains("<script src"));
    assert!(!html.contains("<link"));
    assert!(!html.contains("<img"));
}

#[test]
fn player_text_is_escaped() {
    let (_, html) = render_for("<b>Bobby</b> & Co");
    assert!(html.contains("&lt;b&gt;Bobby&lt;/b&gt; &amp; Co"));
    assert!(!html.contains("<b>Bobby</b>"));
}

fn reimported_card(name: &str, tag: &str) -> (CareerSummary, ProfileCard) {
    let mut rng = StdRng::seed_from_u64(12);
    let records = generate_with(name, NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(), &mut rng);
    let dir = std::env::temp_dir().join(format!("cricket_dashboard_card_{tag}_{}", std::process::id()));
    std::fs::create_dir_all(&dir).expect("scratch dir");
    let path = dir.join("player_data.csv");
    write_csv(&path, &records).expect("csv written");

    let rows = read_csv(&path).expect("csv parses");
    let card = ProfileCard::from_row(&rows[0]);
    assert_eq!(card, ProfileCard {
        image_url: card.image_url.clone(),
        ..ProfileCard::from_profile(&records[0].profile)
    });
    (CareerSummary::from_lines(&rows), card)
}

#[test]
fn reimported_known_player_gets_portrait_back() {
    let (summary, card) = reimported_card("Tilak Varma", "known");
    assert_eq!(card.name, "Tilak Varma");
    assert!(card.image_url.as_deref().is_some_and(|url| url.contains("Tilak_Varma_in_2023.jpg")));

    let html = render_dashboard(&summary, &card);
    assert!(html.contains("<img src=\""));
    assert!(html.contains("Tilak_Varma_in_2023.jpg"));
    assert!(html.contains(&format!(">{}</div>", summary.total_runs)));
}

#[test]
fn reimported_unknown_player_has_no_portrait() {
    let (summary, card) = reimported_card("Unknown Player X", "unknown");
    assert_eq!(card.playing_role, "Allrounder");
    assert!(card.image_url.is_none());
    assert!(!render_dashboard(&summary, &card).contains("<img"));
}
