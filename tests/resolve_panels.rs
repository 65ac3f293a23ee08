use carbon_bank::{ExtendMode, PanelFields, SeriesColor, Year, resolve_panels};

fn story_panels() -> Vec<PanelFields> {
    let s = include_str!("data/panels.json");
    serde_json::from_str(s).unwrap()
}

#[test]
fn story_fixture_resolves_and_validates() {
    let marks = resolve_panels(&story_panels());
    assert_eq!(marks.len(), 9);
    for mark in &marks {
        mark.validate().unwrap();
    }
}

#[test]
fn next_chain_covers_the_whole_sequence() {
    let marks = resolve_panels(&story_panels());
    for (i, mark) in marks.iter().enumerate() {
        if i + 1 < marks.len() {
            assert_eq!(mark.next, Some(i + 1));
        } else {
            assert_eq!(mark.next, None);
        }
    }
}

#[test]
fn sink_panels_keep_sink_ahead_of_carbon() {
    let marks = resolve_panels(&story_panels());
    let mark = &marks[1];
    assert_eq!(mark.blobs[0].id, "sink");
    assert_eq!(mark.blobs[0].emissions, 80.0);
    assert_eq!(mark.blobs[1].id, "carbon");
    assert_eq!(mark.blobs[1].emissions, 100.0);
}

#[test]
fn scalar_and_list_limit_fields_normalize() {
    let marks = resolve_panels(&story_panels());
    assert_eq!(marks[3].limits, vec![0]);
    assert_eq!(marks[4].limits, vec![0, 1, 2]);
    assert_eq!(marks[4].labels, vec!["carbon".to_string()]);
}

#[test]
fn chart_panels_carry_their_specs() {
    let marks = resolve_panels(&story_panels());

    let chart = marks[6].chart.as_ref().unwrap();
    assert_eq!(chart.min_year, Year(1900));
    assert_eq!(chart.max_year, Year(2019));
    assert_eq!(chart.stop_at, Some(Year(2017)));
    assert_eq!(chart.label_years, vec![Year(2017)]);
    assert_eq!(chart.extend, None);

    let chart = marks[8].chart.as_ref().unwrap();
    assert_eq!(chart.extend, Some(ExtendMode::Reduce));
    assert_eq!(chart.steady, Some(5));
}

#[test]
fn charted_marks_feed_the_series_pipeline() {
    let marks = resolve_panels(&story_panels());
    let bank = carbon_bank::Bank::historical();

    let chart = marks[8].chart.as_ref().unwrap();
    let series = carbon_bank::chart_series(&bank, chart);

    let known: Vec<_> = series
        .iter()
        .filter(|p| p.color == SeriesColor::Known)
        .collect();
    assert_eq!(known.first().unwrap().year, Year(1900));
    assert_eq!(known.last().unwrap().year, Year(2019));
    assert!(series.iter().any(|p| p.color != SeriesColor::Known));
}
