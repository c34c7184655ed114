/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Subject catalog: which subjects each course teaches.
//!
//! Every semester and section of a course shares the same curriculum.
//! Unknown courses resolve to [`Curriculum::Default`] instead of failing, so a
//! typo in a course name still yields a (generic) timetable and a `warn!`.

use std::collections::BTreeMap;

// ── Curriculum ────────────────────────────────────────────────────────────────

/// Result of looking a course up in the [`SubjectCatalog`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Curriculum<'a> {
    /// The course is configured; subjects in catalog order.
    Known(&'a [String]),
    /// The course is not configured; the generic fallback list.
    Default(&'a [String]),
}

impl<'a> Curriculum<'a> {
    pub fn subjects(&self) -> &'a [String] {
        match self {
            Curriculum::Known(s) | Curriculum::Default(s) => *s,
        }
    }

    pub fn is_default(&self) -> bool {
        matches!(self, Curriculum::Default(_))
    }
}

// ── SubjectCatalog ────────────────────────────────────────────────────────────

/// Mapping from course identifier to its ordered subject list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubjectCatalog {
    courses: BTreeMap<String, Vec<String>>,
    /// Order in which courses were declared, for listings.
    order: Vec<String>,
    default_curriculum: Vec<String>,
}

impl SubjectCatalog {
    /// Build a catalog from `(course, subjects)` pairs. Later duplicates of a
    /// course name replace earlier ones but keep the first position.
    pub fn new<I>(courses: I, default_curriculum: Vec<String>) -> Self
    where
        I: IntoIterator<Item = (String, Vec<String>)>,
    {
        let mut map = BTreeMap::new();
        let mut order = Vec::new();
        for (course, subjects) in courses {
            if map.insert(course.clone(), subjects).is_none() {
                order.push(course);
            }
        }
        Self {
            courses: map,
            order,
            default_curriculum,
        }
    }

    /// Look up `course`; never fails.
    pub fn lookup(&self, course: &str) -> Curriculum<'_> {
        match self.courses.get(course) {
            Some(subjects) if !subjects.is_empty() => Curriculum::Known(subjects),
            _ => Curriculum::Default(&self.default_curriculum),
        }
    }

    /// Configured course names in declaration order.
    pub fn course_names(&self) -> &[String] {
        &self.order
    }

    pub fn default_curriculum(&self) -> &[String] {
        &self.default_curriculum
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn catalog() -> SubjectCatalog {
        SubjectCatalog::new(
            vec![
                ("MBA".to_string(), strings(&["Corporate Finance", "Leadership Skills"])),
                ("BCA".to_string(), strings(&["Networking", "AI Fundamentals"])),
                ("Empty".to_string(), Vec::new()),
            ],
            strings(&["Core Subject", "Elective", "Project Work"]),
        )
    }

    #[test]
    fn known_course_returns_its_subjects() {
        let c = catalog();
        let cur = c.lookup("BCA");
        assert!(!cur.is_default());
        assert_eq!(cur.subjects(), strings(&["Networking", "AI Fundamentals"]).as_slice());
    }

    #[test]
    fn unknown_course_returns_default_curriculum() {
        let c = catalog();
        let cur = c.lookup("PhD");
        assert!(cur.is_default());
        assert_eq!(cur.subjects().len(), 3);
        assert_eq!(cur.subjects()[0], "Core Subject");
    }

    #[test]
    fn course_with_empty_subject_list_falls_back_to_default() {
        assert!(catalog().lookup("Empty").is_default());
    }

    #[test]
    fn course_names_keep_declaration_order() {
        assert_eq!(catalog().course_names(), strings(&["MBA", "BCA", "Empty"]).as_slice());
    }

    #[test]
    fn duplicate_course_keeps_first_position_and_last_subjects() {
        let c = SubjectCatalog::new(
            vec![
                ("X".to_string(), strings(&["a"])),
                ("Y".to_string(), strings(&["b"])),
                ("X".to_string(), strings(&["c"])),
            ],
            Vec::new(),
        );
        assert_eq!(c.course_names(), strings(&["X", "Y"]).as_slice());
        assert_eq!(c.lookup("X").subjects(), strings(&["c"]).as_slice());
    }
}
