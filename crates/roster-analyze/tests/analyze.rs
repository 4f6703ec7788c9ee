//! Integration tests for roster analysis.

use roster_analyze::{
    AnalyzeError, BattingAggregate, PASTED_DATA_NAME, PitchingAggregate, analyze, analyze_inputs,
    combine,
};
use roster_ingest::parse_csv_text;
use roster_model::{DataType, UploadedFile};

const HITTERS: &str = "player_id,team_id,position,batting_ratings_overall_contact,batting_ratings_overall_power\n\
                       1,5,1,45,30\n\
                       2,5,2,25,45";

const PITCHERS: &str = "player_id,pitching_ratings_overall_stuff,pitching_ratings_overall_control\n\
                        10,55,20\n\
                        11,45,30\n\
                        12,70,0";

#[test]
fn end_to_end_batting_file() {
    let table = parse_csv_text(HITTERS).unwrap();
    let analysis = analyze(&table, "hitters.csv");

    assert_eq!(analysis.data_type, DataType::Batting);
    assert_eq!(analysis.total_players, 2);
    assert_eq!(BattingAggregate::from_table(&table).active_count, 2);
    let stats = &analysis.stats_breakdown;
    assert_eq!(stats.get("avgContact").unwrap().as_str(), "35.0");
    assert_eq!(stats.get("avgPower").unwrap().as_str(), "37.5");
    assert_eq!(stats.get("avgSpeed").unwrap().as_str(), "0.0");
    assert!(analysis.warnings.is_empty());
    assert_eq!(analysis.insights, vec!["Batting: 2 players analyzed"]);
    assert_eq!(
        analysis.opportunities,
        vec!["Review lineup construction for efficiency"]
    );
}

#[test]
fn pitching_file_uses_and_inclusion() {
    let table = parse_csv_text(PITCHERS).unwrap();
    let analysis = analyze(&table, "staff.csv");

    assert_eq!(analysis.data_type, DataType::Pitching);
    assert_eq!(PitchingAggregate::from_table(&table).count, 2);
    assert_eq!(analysis.stats_breakdown.get("avgStuff").unwrap().as_str(), "50.0");
    assert_eq!(analysis.stats_breakdown.get("avgControl").unwrap().as_str(), "25.0");
    assert_eq!(
        analysis.warnings,
        vec!["Pitching control weak - higher walk rates expected"]
    );
    assert_eq!(analysis.insights, vec!["Pitching: 3 players analyzed"]);
    assert_eq!(
        analysis.opportunities,
        vec!["Evaluate rotation depth and bullpen options"]
    );
}

#[test]
fn power_warning_boundary() {
    // 249 / 10 = 24.9 fires, 250 / 10 = 25.0 does not
    let mut weak = String::from("batting_ratings_overall_contact,batting_ratings_overall_power");
    let mut solid = weak.clone();
    for idx in 0..10 {
        let power = if idx == 0 { 24 } else { 25 };
        weak.push_str(&format!("\n50,{power}"));
        solid.push_str("\n50,25");
    }

    let weak = analyze(&parse_csv_text(&weak).unwrap(), "weak.csv");
    let solid = analyze(&parse_csv_text(&solid).unwrap(), "solid.csv");

    assert_eq!(weak.stats_breakdown.get("avgPower").unwrap().as_str(), "24.9");
    assert_eq!(
        weak.warnings,
        vec!["Offensive power below average - consider upgrades"]
    );
    assert_eq!(solid.stats_breakdown.get("avgPower").unwrap().as_str(), "25.0");
    assert!(solid.warnings.is_empty());
}

#[test]
fn contact_and_power_warnings_keep_rule_order() {
    let table = parse_csv_text(
        "batting_ratings_overall_contact,batting_ratings_overall_power\n10,20\n12,22",
    )
    .unwrap();
    let analysis = analyze(&table, "weak.csv");
    assert_eq!(
        analysis.warnings,
        vec![
            "Offensive power below average - consider upgrades",
            "Contact ability weak - expect strikeouts",
        ]
    );
}

// Oversized cells saturate to i64::MAX; summing two of them must not overflow.
#[test]
fn oversized_pitching_ratings_average_without_overflow() {
    let table = parse_csv_text(
        "pitching_ratings_overall_stuff,pitching_ratings_overall_control\n\
         99999999999999999999,50\n\
         99999999999999999999,50",
    )
    .unwrap();
    let analysis = analyze(&table, "huge.csv");

    assert_eq!(PitchingAggregate::from_table(&table).count, 2);
    assert!(analysis.stats_breakdown.get("avgStuff").unwrap().value() > 9.0e18);
    assert_eq!(analysis.stats_breakdown.get("avgControl").unwrap().as_str(), "50.0");
    assert!(analysis.warnings.is_empty());
}

#[test]
fn oversized_batting_contact_averages_without_overflow() {
    let table = parse_csv_text(
        "batting_ratings_overall_contact,batting_ratings_overall_power\n\
         9223372036854775807,10\n\
         5,10",
    )
    .unwrap();
    let analysis = analyze(&table, "huge.csv");

    let aggregate = BattingAggregate::from_table(&table);
    assert_eq!(aggregate.active_count, 2);
    assert_eq!(aggregate.contact_sum, i128::from(i64::MAX) + 5);
    assert!(analysis.stats_breakdown.get("avgContact").unwrap().value() > 4.0e18);
    assert_eq!(analysis.stats_breakdown.get("avgPower").unwrap().as_str(), "10.0");
    assert_eq!(
        analysis.warnings,
        vec!["Offensive power below average - consider upgrades"]
    );
}

#[test]
fn combine_tags_warnings_in_file_order() {
    let first = {
        let mut a = analyze(&parse_csv_text(HITTERS).unwrap(), "a.csv");
        a.total_players = 3;
        a.warnings = vec!["one".to_string()];
        a
    };
    let second = {
        let mut b = analyze(&parse_csv_text(PITCHERS).unwrap(), "b.csv");
        b.total_players = 5;
        b.warnings = vec!["two".to_string()];
        b
    };

    let combined = combine(&[first, second]);

    assert_eq!(combined.total_players, 8);
    assert_eq!(combined.warnings, vec!["[a.csv] one", "[b.csv] two"]);
}

#[test]
fn analyze_inputs_requires_some_input() {
    assert_eq!(analyze_inputs(&[], None), Err(AnalyzeError::EmptyInput));
    assert_eq!(analyze_inputs(&[], Some("  \n ")), Err(AnalyzeError::EmptyInput));
}

#[test]
fn analyze_inputs_reports_unparseable_data() {
    let files = vec![
        UploadedFile::new("header-only.csv", "a,b,c"),
        UploadedFile::new("blank-rows.csv", "a,b\n,\n , "),
    ];
    assert_eq!(
        analyze_inputs(&files, Some("just one line")),
        Err(AnalyzeError::NoParseableData)
    );
}

#[test]
fn analyze_inputs_skips_bad_files_and_appends_pasted_data() {
    let files = vec![
        UploadedFile::new("hitters.csv", HITTERS),
        UploadedFile::new("empty.csv", ""),
        UploadedFile::new("staff.csv", PITCHERS),
    ];

    let run = analyze_inputs(&files, Some("player_id,age\n1,30")).unwrap();

    let names: Vec<&str> = run.analyses.iter().map(|a| a.file_name.as_str()).collect();
    assert_eq!(names, vec!["hitters.csv", "staff.csv", PASTED_DATA_NAME]);
    assert_eq!(run.combined.file_count, 3);
    assert_eq!(run.combined.total_players, 6);
    assert_eq!(run.combined.batting_count, 1);
    assert_eq!(run.combined.pitching_count, 1);
}

#[test]
fn combined_report_snapshot() {
    let files = vec![
        UploadedFile::new("hitters.csv", HITTERS),
        UploadedFile::new("staff.csv", PITCHERS),
    ];
    let run = analyze_inputs(&files, None).unwrap();

    insta::assert_json_snapshot!(run.combined, @r###"
    {
      "fileCount": 2,
      "totalPlayers": 5,
      "warnings": [
        "[staff.csv] Pitching control weak - higher walk rates expected"
      ],
      "battingCount": 1,
      "pitchingCount": 1
    }
    "###);
}

#[test]
fn analysis_json_shape() {
    let table = parse_csv_text(PITCHERS).unwrap();
    let json = serde_json::to_value(analyze(&table, "staff.csv")).unwrap();

    assert_eq!(json["dataType"], "Pitching");
    assert_eq!(json["statsBreakdown"]["avgStuff"], "50.0");
    assert_eq!(json["statsBreakdown"]["avgControl"], "25.0");
}
