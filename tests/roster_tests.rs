use drills::{
    Console, Record,
    roster::{
        self, LetterGrade, ReportFormat, Roster, Score, Student, StudentCount, report_text,
        statistics_text,
    },
};

fn scores(a: i64, b: i64, c: i64) -> [Score; 3] {
    [a, b, c].map(|s| Score::try_from(s).expect("valid score"))
}

fn sample_class() -> Roster {
    Roster::new(vec![
        Student::new("Alice", scores(95, 92, 98)),
        Student::new("Bob", scores(78, 82, 75)),
        Student::new("Charlie", scores(88, 90, 85)),
    ])
}

fn rule(c: char) -> String {
    c.to_string().repeat(50)
}

#[test]
fn grade_thresholds() {
    assert_eq!(LetterGrade::from_average(100.0), LetterGrade::A);
    assert_eq!(LetterGrade::from_average(90.0), LetterGrade::A);
    assert_eq!(LetterGrade::from_average(89.99), LetterGrade::B);
    assert_eq!(LetterGrade::from_average(80.0), LetterGrade::B);
    assert_eq!(LetterGrade::from_average(70.0), LetterGrade::C);
    assert_eq!(LetterGrade::from_average(60.0), LetterGrade::D);
    assert_eq!(LetterGrade::from_average(59.99), LetterGrade::F);
    assert_eq!(LetterGrade::from_average(0.0), LetterGrade::F);
}

#[test]
fn scores_and_counts_are_bounded() {
    assert!(Score::read("101").unwrap_err().is_range());
    assert!(Score::read("-1").unwrap_err().is_range());
    assert!(!Score::read("ninety").unwrap_err().is_range());
    assert_eq!(Score::read(" 0 ").map(Score::value), Ok(0));

    assert!(StudentCount::read("0").unwrap_err().is_range());
    assert!(StudentCount::read("11").unwrap_err().is_range());
    assert!(!StudentCount::read("").unwrap_err().is_range());
    assert_eq!(StudentCount::read("10").map(StudentCount::get), Ok(10));

    assert!(Score::read("100000000000000000000").unwrap_err().is_range());
    assert!(Score::read("-100000000000000000000").unwrap_err().is_range());
    assert_eq!(Score::read("00000000000000000000100").map(Score::value), Ok(100));
    assert!(StudentCount::read("100000000000000000000").unwrap_err().is_range());
}

#[test]
fn student_average_and_grade() {
    let bob = Student::new("Bob", scores(78, 82, 75));
    assert_eq!(format!("{:.2}", bob.average()), "78.33");
    assert_eq!(bob.grade(), LetterGrade::C);
    assert_eq!(bob.scores_list(), "[78, 82, 75]");
    assert_eq!(bob.scores().iter().map(|s| s.value()).collect::<Vec<_>>(), [78, 82, 75]);
}

#[test]
fn class_statistics() {
    let stats = sample_class().statistics().expect("non-empty class");
    assert_eq!(stats.total(), 3);
    assert_eq!(format!("{:.2}", stats.average()), "87.00");
    assert_eq!(stats.highest(), 95.0);
    assert_eq!(format!("{:.2}", stats.lowest()), "78.33");
    assert_eq!(
        stats.distribution(),
        [(LetterGrade::A, 1), (LetterGrade::B, 1), (LetterGrade::C, 1)]
    );
}

#[test]
fn distribution_skips_empty_grades() {
    let roster = Roster::new(vec![
        Student::new("Dee", scores(50, 50, 50)),
        Student::new("Eve", scores(95, 95, 95)),
        Student::new("Fay", scores(40, 40, 40)),
    ]);
    let stats = roster.statistics().expect("non-empty class");
    assert_eq!(stats.distribution(), [(LetterGrade::A, 1), (LetterGrade::F, 2)]);
}

#[test]
fn empty_roster_has_no_statistics() {
    assert!(Roster::default().statistics().is_none());
}

#[test]
fn statistics_are_idempotent() {
    let roster = sample_class();
    let first = roster.statistics();
    let second = roster.statistics();
    assert_eq!(first, second);
    assert_eq!(report_text(&roster), report_text(&roster));

    let stats = first.expect("non-empty class");
    assert_eq!(statistics_text(&stats), statistics_text(&stats));
}

#[test]
fn text_report_layout() {
    let expected = format!(
        "\n{eq}\nSTUDENT GRADE REPORT\n{eq}\n\nAlice\n  Test Scores: [95, 92, 98]\n  Average: \
         95.00\n  Grade: A\n\nBob\n  Test Scores: [78, 82, 75]\n  Average: 78.33\n  Grade: \
         C\n\nCharlie\n  Test Scores: [88, 90, 85]\n  Average: 87.67\n  Grade: B\n",
        eq = rule('=')
    );
    assert_eq!(report_text(&sample_class()), expected);
}

#[test]
fn text_statistics_layout() {
    let stats = sample_class().statistics().expect("non-empty class");
    let expected = format!(
        "\n{eq}\nCLASS STATISTICS\n{eq}\n\nTotal Students: 3\nClass Average: 87.00\nHighest \
         Average: 95.00\nLowest Average: 78.33\n\nGrade Distribution:\n  A: 1 student(s)\n  B: \
         1 student(s)\n  C: 1 student(s)\n",
        eq = rule('=')
    );
    assert_eq!(statistics_text(&stats), expected);
}

#[test]
fn run_single_perfect_student() {
    let mut console = Console::new("1\nSam\n100\n100\n100\n".as_bytes(), Vec::new());
    let roster = roster::run(&mut console, ReportFormat::Text).expect("complete entry");
    assert_eq!(roster.students().len(), 1);

    let out = String::from_utf8(console.into_writer()).unwrap();
    let expected_start = format!(
        "{eq}\nStudent Grade Management System\n{eq}\n\nHow many students? \nEnter data for 1 \
         students:\n{dash}\n\nStudent #1:\n  Name:   Test 1 score (0-100):   Test 2 score \
         (0-100):   Test 3 score (0-100): ",
        eq = rule('='),
        dash = rule('-')
    );
    assert!(out.starts_with(&expected_start), "{out}");
    assert!(out.contains("\nSam\n  Test Scores: [100, 100, 100]\n  Average: 100.00\n  Grade: A\n"));
    assert!(out.contains("Class Average: 100.00\n"));
    assert!(out.ends_with("\nGrade Distribution:\n  A: 1 student(s)\n"));
}

#[test]
fn run_explains_rejected_input() {
    let input = "0\nabc\n11\n1\nSam\n101\nx\n-1\n100\n90\n80\n";
    let mut console = Console::new(input.as_bytes(), Vec::new());
    let roster = roster::run(&mut console, ReportFormat::Text).expect("complete entry");
    assert_eq!(roster.students()[0].grade(), LetterGrade::A);

    let out = String::from_utf8(console.into_writer()).unwrap();
    assert!(out.contains(
        "\nHow many students? Please enter a number between 1 and 10\n\nHow many students? \
         Please enter a valid number\n\nHow many students? Please enter a number between 1 and \
         10\n\nHow many students? \n"
    ));
    assert!(out.contains(
        "  Test 1 score (0-100):     Score must be between 0 and 100\n  Test 1 score (0-100):     \
         Please enter a valid number\n  Test 1 score (0-100):     Score must be between 0 and \
         100\n  Test 1 score (0-100):   Test 2 score (0-100): "
    ));
    assert!(out.contains("  Average: 90.00\n"));
}

#[test]
fn run_stops_abruptly_at_end_of_input() {
    let mut console = Console::new("2\nSam\n100\n".as_bytes(), Vec::new());
    let err = roster::run(&mut console, ReportFormat::Text).expect_err("incomplete entry");
    assert!(err.is_end_of_input());
}

#[test]
fn json_report() {
    let roster = Roster::new(vec![Student::new("Sam", scores(100, 100, 100))]);
    let json = roster::report_json(&roster).expect("serializable");
    let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");

    assert_eq!(value["students"][0]["name"], "Sam");
    assert_eq!(value["students"][0]["scores"], serde_json::json!([100, 100, 100]));
    assert_eq!(value["students"][0]["grade"], "A");
    assert_eq!(value["statistics"]["average"], 100.0);
    assert_eq!(value["statistics"]["distribution"], serde_json::json!([["A", 1]]));
}

#[test]
fn table_report() {
    let mut console = Console::new("1\nSam\n100\n90\n95\n".as_bytes(), Vec::new());
    roster::run(&mut console, ReportFormat::Table).expect("complete entry");
    let out = String::from_utf8(console.into_writer()).unwrap();
    assert!(out.contains("Student Grade Report"));
    assert!(out.contains("Sam"));
    assert!(out.contains("95.00"));
    assert!(out.contains("Class Statistics: 1 students"));
}

#[test]
fn report_format_names() {
    assert_eq!("TEXT".parse::<ReportFormat>(), Ok(ReportFormat::Text));
    assert_eq!("table".parse::<ReportFormat>(), Ok(ReportFormat::Table));
    assert_eq!("json".parse::<ReportFormat>(), Ok(ReportFormat::Json));
    assert!("yaml".parse::<ReportFormat>().is_err());
}
