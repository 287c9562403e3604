//! Candidate course listing

use comfy_table::{presets::NOTHING, Table};

use crate::platform::Course;

/// Build the table of courses about to be deleted
pub fn courses_table(courses: &[Course]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(NOTHING)
        .set_header(vec!["ID", "Short Name", "Full Name", "Category"]);

    for course in courses {
        let category = course
            .categoryid
            .map(|c| c.to_string())
            .unwrap_or_else(|| "-".to_string());
        table.add_row(vec![
            course.id.to_string(),
            course.shortname.clone(),
            course.fullname.clone(),
            category,
        ]);
    }

    table
}

/// Print the courses about to be deleted
pub fn output_courses(courses: &[Course]) {
    println!("{}", courses_table(courses));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::testing::course;

    #[test]
    fn test_courses_table_lists_every_course() {
        let rendered = courses_table(&[course(8, "SOLO", 1), course(9, "LAB", 2)]).to_string();
        assert!(rendered.contains("Short Name"));
        assert!(rendered.contains("SOLO"));
        assert!(rendered.contains("LAB full name"));
        assert!(rendered.contains('9'));
    }

    #[test]
    fn test_missing_category_shows_dash() {
        let mut c = course(8, "SOLO", 1);
        c.categoryid = None;
        let rendered = courses_table(&[c]).to_string();
        assert!(rendered.contains('-'));
    }
}
