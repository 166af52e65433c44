use autoquiz::api::{QuestionErrorRate, WordCloudEntry};
use autoquiz::utils::format_datetime;
use autoquiz::views::components::{line_points, pie_slices, word_cloud, CHART_COLORS};

#[test]
fn pie_slices_are_the_rate_and_its_complement() {
    assert_eq!(pie_slices(0.75), [0.75, 0.25]);
    assert_eq!(pie_slices(0.0), [0.0, 1.0]);
    assert_eq!(pie_slices(1.0), [1.0, 0.0]);
}

#[test]
fn line_points_keep_the_server_supplied_question_order() {
    let rates = vec![
        QuestionErrorRate {
            question: 1,
            correct_rate: 80.0,
        },
        QuestionErrorRate {
            question: 2,
            correct_rate: 70.0,
        },
        QuestionErrorRate {
            question: 3,
            correct_rate: 95.5,
        },
    ];

    let (labels, values) = line_points(&rates);

    assert_eq!(labels, vec![1, 2, 3]);
    assert_eq!(values, vec![80.0, 70.0, 95.5]);
}

#[test]
fn line_points_of_an_empty_report_are_empty() {
    let (labels, values) = line_points(&[]);
    assert!(labels.is_empty());
    assert!(values.is_empty());
}

#[test]
fn word_cloud_embeds_terms_and_the_layout_parameters() {
    let entries = vec![
        WordCloudEntry {
            text: "函数".to_string(),
            value: 30.0,
        },
        WordCloudEntry {
            text: "导数".to_string(),
            value: 18.0,
        },
    ];

    let markup = word_cloud(&entries).into_string();

    assert!(markup.contains("函数"));
    assert!(markup.contains("导数"));
    // 800x400 canvas, padding 5, 0/90 degree rotation.
    assert!(markup.contains("width=800,height=400"));
    assert!(markup.contains(".padding(5)"));
    assert!(markup.contains("*2)*90"));
    // Colors come from the fixed qualitative palette.
    for color in CHART_COLORS {
        assert!(markup.contains(color));
    }
}

#[test]
fn timestamps_format_to_minutes_and_fall_through_when_unparseable() {
    assert_eq!(format_datetime("2024-01-01T10:00:00Z"), "2024-01-01 10:00");
    assert_eq!(format_datetime("2024-03-05 09:30:00"), "2024-03-05 09:30");
    assert_eq!(format_datetime("someday"), "someday");
}
