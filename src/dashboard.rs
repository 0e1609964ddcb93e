//! Teacher dashboard queries over the student roster

use crate::content::Student;

/// Students below this progress percentage need attention
pub const NEEDS_HELP_THRESHOLD: u8 = 50;

/// How many students the top/needs-help panels show
pub const PANEL_SIZE: usize = 3;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DashboardStats {
    pub total_students: usize,
    pub average_progress: u32,
    pub average_quiz_score: u32,
    pub total_lessons: u32,
}

fn rounded_mean(sum: u32, count: usize) -> u32 {
    if count == 0 {
        return 0;
    }
    (sum as f64 / count as f64).round() as u32
}

pub fn stats(students: &[Student]) -> DashboardStats {
    let progress: u32 = students.iter().map(|s| s.progress as u32).sum();
    let quiz: u32 = students.iter().map(|s| s.total_quiz_score).sum();
    DashboardStats {
        total_students: students.len(),
        average_progress: rounded_mean(progress, students.len()),
        average_quiz_score: rounded_mean(quiz, students.len()),
        total_lessons: students.iter().map(|s| s.lessons_completed).sum(),
    }
}

/// Highest quiz scores first; ties keep roster order
pub fn top_performers(students: &[Student]) -> Vec<&Student> {
    let mut ranked: Vec<&Student> = students.iter().collect();
    ranked.sort_by(|a, b| b.total_quiz_score.cmp(&a.total_quiz_score));
    ranked.truncate(PANEL_SIZE);
    ranked
}

pub fn needing_help(students: &[Student]) -> Vec<&Student> {
    students
        .iter()
        .filter(|s| s.progress < NEEDS_HELP_THRESHOLD)
        .take(PANEL_SIZE)
        .collect()
}

/// Case-insensitive match on name or email. An empty query matches everyone.
pub fn search<'a>(students: &'a [Student], query: &str) -> Vec<&'a Student> {
    let query = query.trim().to_lowercase();
    students
        .iter()
        .filter(|s| {
            query.is_empty()
                || s.name.to_lowercase().contains(&query)
                || s.email.to_lowercase().contains(&query)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Catalog;

    fn roster() -> Vec<Student> {
        Catalog::embedded().unwrap().students
    }

    #[test]
    fn test_stats_over_builtin_roster() {
        let s = stats(&roster());
        assert_eq!(s.total_students, 5);
        // (85 + 92 + 45 + 88 + 72) / 5 = 76.4
        assert_eq!(s.average_progress, 76);
        // (88 + 94 + 72 + 91 + 85) / 5 = 86
        assert_eq!(s.average_quiz_score, 86);
        assert_eq!(s.total_lessons, 32 + 38 + 18 + 35);
    }

    #[test]
    fn test_stats_empty_roster() {
        assert_eq!(stats(&[]), DashboardStats::default());
    }

    #[test]
    fn test_top_performers_sorted() {
        let roster = roster();
        let names: Vec<&str> = top_performers(&roster).iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["Rahul Patil", "Vikram Joshi", "Priya Sharma"]);
    }

    #[test]
    fn test_needing_help() {
        let roster = roster();
        let help = needing_help(&roster);
        assert_eq!(help.len(), 1);
        assert_eq!(help[0].name, "Anita Deshmukh");
    }

    #[test]
    fn test_search_matches_name_and_email() {
        let roster = roster();
        assert_eq!(search(&roster, "").len(), 5);
        assert_eq!(search(&roster, "PRIYA").len(), 1);
        assert_eq!(search(&roster, "rahul@").len(), 1);
        assert!(search(&roster, "nobody").is_empty());
    }
}
