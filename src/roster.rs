#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::{
    fmt::Display,
    io::{BufRead, Write},
};

use itertools::Itertools;
use num_traits::{Signed, ToPrimitive};
use serde::Serialize;
use tabled::{
    Table, Tabled,
    settings::{Alignment, Modify, Panel, Style, object::Rows},
};

use crate::{
    constants::{
        MAX_SCORE, MAX_STUDENTS, MIN_SCORE, MIN_STUDENTS, RULE_WIDTH, SCORES_PER_STUDENT,
    },
    error::{InputError, RecordError},
    parsers::parser,
    prompt::{Console, Feedback, Record},
};

/// Message shown when a count or score is not an integer.
const NOT_A_NUMBER: &str = "Please enter a valid number";

/// A single test score, `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Score(u8);

impl Score {
    /// The score as a number.
    pub fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<i64> for Score {
    type Error = RecordError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if (MIN_SCORE..=MAX_SCORE).contains(&value) {
            Ok(Score(value as u8))
        } else {
            Err(RecordError::range(format!(
                "Score must be between {MIN_SCORE} and {MAX_SCORE}"
            )))
        }
    }
}

impl Record for Score {
    fn parse(line: &str) -> Result<Self, RecordError> {
        let value = parse_int(line)?;
        Score::try_from(value)
    }
}

impl Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// How many students to enter, `1..=10`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StudentCount(usize);

impl StudentCount {
    /// The count as a number.
    pub fn get(self) -> usize {
        self.0
    }
}

impl Record for StudentCount {
    fn parse(line: &str) -> Result<Self, RecordError> {
        let value = parse_int(line)?;
        if (MIN_STUDENTS..=MAX_STUDENTS).contains(&value) {
            Ok(StudentCount(value as usize))
        } else {
            Err(RecordError::range(format!(
                "Please enter a number between {MIN_STUDENTS} and {MAX_STUDENTS}"
            )))
        }
    }
}

/// Reads a whole line as a decimal integer, ignoring surrounding whitespace.
///
/// Integers wider than 64 bits saturate, so they still land in the range
/// check rather than being reported as non-numeric.
fn parse_int(line: &str) -> Result<i64, RecordError> {
    let n = parser::int(line).map_err(|_| RecordError::format(NOT_A_NUMBER))?;
    Ok(n.to_i64()
        .unwrap_or(if n.is_negative() { i64::MIN } else { i64::MAX }))
}

/// Letter grade for an average.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum LetterGrade {
    /// 90 and above.
    A,
    /// 80 to below 90.
    B,
    /// 70 to below 80.
    C,
    /// 60 to below 70.
    D,
    /// Below 60.
    F,
}

impl LetterGrade {
    /// Every grade, best first.
    pub const ALL: [LetterGrade; 5] = [
        LetterGrade::A,
        LetterGrade::B,
        LetterGrade::C,
        LetterGrade::D,
        LetterGrade::F,
    ];

    /// Applies the fixed thresholds `90/80/70/60`.
    pub fn from_average(average: f64) -> Self {
        if average >= 90.0 {
            LetterGrade::A
        } else if average >= 80.0 {
            LetterGrade::B
        } else if average >= 70.0 {
            LetterGrade::C
        } else if average >= 60.0 {
            LetterGrade::D
        } else {
            LetterGrade::F
        }
    }
}

impl Display for LetterGrade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let letter = match self {
            LetterGrade::A => "A",
            LetterGrade::B => "B",
            LetterGrade::C => "C",
            LetterGrade::D => "D",
            LetterGrade::F => "F",
        };
        write!(f, "{letter}")
    }
}

/// One student's scores and the grade derived from them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Student {
    /// Name as entered.
    name:    String,
    /// Test scores in the order entered.
    scores:  [Score; SCORES_PER_STUDENT],
    /// Mean of the scores.
    average: f64,
    /// Letter grade for the average.
    grade:   LetterGrade,
}

impl Student {
    /// Builds a student record, deriving average and grade.
    pub fn new(name: impl Into<String>, scores: [Score; SCORES_PER_STUDENT]) -> Self {
        let sum: f64 = scores.iter().map(|s| f64::from(s.value())).sum();
        let average = sum / SCORES_PER_STUDENT as f64;
        Self {
            name: name.into(),
            scores,
            average,
            grade: LetterGrade::from_average(average),
        }
    }

    /// Student name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Test scores in entry order.
    pub fn scores(&self) -> &[Score; SCORES_PER_STUDENT] {
        &self.scores
    }

    /// Mean score.
    pub fn average(&self) -> f64 {
        self.average
    }

    /// Letter grade.
    pub fn grade(&self) -> LetterGrade {
        self.grade
    }

    /// Scores formatted as a list, eg. `[95, 92, 98]`.
    pub fn scores_list(&self) -> String {
        format!("[{}]", self.scores().iter().join(", "))
    }
}

/// Class-wide figures derived from a roster.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassStatistics {
    /// Number of students.
    total:        usize,
    /// Mean of the student averages.
    average:      f64,
    /// Highest student average.
    highest:      f64,
    /// Lowest student average.
    lowest:       f64,
    /// Students per grade, best grade first, only grades that occur.
    distribution: Vec<(LetterGrade, usize)>,
}

impl ClassStatistics {
    /// Number of students.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Mean of the student averages.
    pub fn average(&self) -> f64 {
        self.average
    }

    /// Highest student average.
    pub fn highest(&self) -> f64 {
        self.highest
    }

    /// Lowest student average.
    pub fn lowest(&self) -> f64 {
        self.lowest
    }

    /// Students per grade, only grades with at least one student.
    pub fn distribution(&self) -> &[(LetterGrade, usize)] {
        &self.distribution
    }
}

/// A finished, read-only collection of students.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Roster(Vec<Student>);

impl Roster {
    /// Wraps a list of students.
    pub fn new(students: Vec<Student>) -> Self {
        Self(students)
    }

    /// Students in entry order.
    pub fn students(&self) -> &[Student] {
        &self.0
    }

    /// Computes class statistics. Returns `None` for an empty roster.
    pub fn statistics(&self) -> Option<ClassStatistics> {
        if self.0.is_empty() {
            return None;
        }

        let averages = self.0.iter().map(Student::average).collect_vec();
        let average = averages.iter().sum::<f64>() / averages.len() as f64;
        let highest = averages.iter().copied().fold(f64::MIN, f64::max);
        let lowest = averages.iter().copied().fold(f64::MAX, f64::min);

        let counts = self.0.iter().map(Student::grade).counts();
        let distribution = LetterGrade::ALL
            .into_iter()
            .filter_map(|grade| counts.get(&grade).map(|n| (grade, *n)))
            .collect();

        Some(ClassStatistics {
            total: self.0.len(),
            average,
            highest,
            lowest,
            distribution,
        })
    }
}

/// How the report and statistics are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    /// Plain text, one field per line.
    #[default]
    Text,
    /// Boxed tables.
    Table,
    /// A single JSON document.
    Json,
}

impl std::str::FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(ReportFormat::Text),
            "table" => Ok(ReportFormat::Table),
            "json" => Ok(ReportFormat::Json),
            other => Err(format!("unknown format `{other}`, expected text, table or json")),
        }
    }
}

/// Returns a horizontal rule of `c`.
fn rule(c: char) -> String {
    c.to_string().repeat(RULE_WIDTH)
}

/// Returns a titled banner framed by `=` rules.
fn banner(title: &str) -> String {
    format!("{}\n{title}\n{}", rule('='), rule('='))
}

/// Plain-text student report.
pub fn report_text(roster: &Roster) -> String {
    let mut out = format!("\n{}\n", banner("STUDENT GRADE REPORT"));
    for student in roster.students() {
        out.push_str(&format!(
            "\n{}\n  Test Scores: {}\n  Average: {:.2}\n  Grade: {}\n",
            student.name(),
            student.scores_list(),
            student.average(),
            student.grade()
        ));
    }
    out
}

/// Plain-text class statistics.
pub fn statistics_text(stats: &ClassStatistics) -> String {
    let mut out = format!("\n{}\n", banner("CLASS STATISTICS"));
    out.push_str(&format!(
        "\nTotal Students: {}\nClass Average: {:.2}\nHighest Average: {:.2}\nLowest Average: \
         {:.2}\n",
        stats.total(),
        stats.average(),
        stats.highest(),
        stats.lowest()
    ));
    out.push_str("\nGrade Distribution:\n");
    for (grade, count) in stats.distribution() {
        out.push_str(&format!("  {grade}: {count} student(s)\n"));
    }
    out
}

/// One row of the tabled student report.
#[derive(Tabled)]
struct StudentRow {
    /// Student name.
    #[tabled(rename = "Student")]
    name:    String,
    /// Scores as a list.
    #[tabled(rename = "Test Scores")]
    scores:  String,
    /// Average to two decimals.
    #[tabled(rename = "Average")]
    average: String,
    /// Letter grade.
    #[tabled(rename = "Grade")]
    grade:   LetterGrade,
}

/// One row of the tabled grade distribution.
#[derive(Tabled)]
struct DistributionRow {
    /// Letter grade.
    #[tabled(rename = "Grade")]
    grade:    LetterGrade,
    /// Number of students with that grade.
    #[tabled(rename = "Students")]
    students: usize,
}

/// Tabled student report.
pub fn report_table(roster: &Roster) -> String {
    let rows = roster
        .students()
        .iter()
        .map(|s| StudentRow {
            name:    s.name().to_string(),
            scores:  s.scores_list(),
            average: format!("{:.2}", s.average()),
            grade:   s.grade(),
        })
        .collect_vec();

    Table::new(&rows)
        .with(Panel::header("Student Grade Report"))
        .with(Modify::new(Rows::new(1..)).with(Alignment::center()))
        .with(Style::modern())
        .to_string()
}

/// Tabled class statistics.
pub fn statistics_table(stats: &ClassStatistics) -> String {
    let rows = stats
        .distribution()
        .iter()
        .map(|(grade, students)| DistributionRow {
            grade:    *grade,
            students: *students,
        })
        .collect_vec();

    Table::new(&rows)
        .with(Panel::header(format!(
            "Class Statistics: {} students, average {:.2} (high {:.2}, low {:.2})",
            stats.total(),
            stats.average(),
            stats.highest(),
            stats.lowest()
        )))
        .with(Modify::new(Rows::new(1..)).with(Alignment::center()))
        .with(Style::modern())
        .to_string()
}

/// JSON document holding the roster and its statistics.
#[derive(Serialize)]
struct JsonReport<'a> {
    /// Every student in entry order.
    students:   &'a Roster,
    /// Class statistics, absent for an empty roster.
    statistics: Option<ClassStatistics>,
}

/// Renders the roster and its statistics as pretty-printed JSON.
pub fn report_json(roster: &Roster) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&JsonReport {
        students:   roster,
        statistics: roster.statistics(),
    })
}

/// Asks for the class size, re-prompting with an explanation until it is
/// between 1 and 10.
pub fn read_count<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
) -> Result<StudentCount, InputError> {
    console.prompt_record("\nHow many students? ", Feedback::Explain { indent: "" })
}

/// Asks for `count` students: a name and three scores each.
pub fn read_students<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    count: StudentCount,
) -> Result<Roster, InputError> {
    console.say(format!("\nEnter data for {} students:", count.get()))?;
    console.say(rule('-'))?;

    let mut students = Vec::with_capacity(count.get());
    for i in 1..=count.get() {
        console.say(format!("\nStudent #{i}:"))?;
        let name = console.prompt("  Name: ")?;

        let mut scores = [Score(0); SCORES_PER_STUDENT];
        for (test_num, slot) in (1..).zip(scores.iter_mut()) {
            *slot = console.prompt_record(
                &format!("  Test {test_num} score ({MIN_SCORE}-{MAX_SCORE}): "),
                Feedback::Explain { indent: "    " },
            )?;
        }

        let student = Student::new(name, scores);
        tracing::debug!(
            "{} averaged {:.2} ({})",
            student.name(),
            student.average(),
            student.grade()
        );
        students.push(student);
    }

    Ok(Roster::new(students))
}

/// Writes the report and statistics for `roster` in `format`.
pub fn print_report<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    roster: &Roster,
    format: ReportFormat,
) -> Result<(), InputError> {
    let stats = roster.statistics();
    match format {
        ReportFormat::Text => {
            write!(console.writer(), "{}", report_text(roster))?;
            if let Some(stats) = &stats {
                write!(console.writer(), "{}", statistics_text(stats))?;
            }
        }
        ReportFormat::Table => {
            console.say(report_table(roster))?;
            if let Some(stats) = &stats {
                console.say(statistics_table(stats))?;
            }
        }
        ReportFormat::Json => {
            let json = report_json(roster).map_err(std::io::Error::other)?;
            console.say(json)?;
        }
    }
    Ok(())
}

/// Runs the whole roster session: banner, data entry, report.
pub fn run<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    format: ReportFormat,
) -> Result<Roster, InputError> {
    console.say(banner("Student Grade Management System"))?;

    let count = read_count(console)?;
    let roster = read_students(console, count)?;
    tracing::info!("collected {} student(s)", roster.students().len());

    print_report(console, &roster, format)?;
    Ok(roster)
}
