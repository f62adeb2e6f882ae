//! Pure queries over a materialized employee list.
//!
//! Every function here is total: an empty list is a valid input and yields a
//! defined result.

use crate::employee::model::Employee;

/// Number of names returned by the top-earners query.
pub const TOP_EARNER_LIMIT: usize = 10;

/// Employees whose name contains `fragment`, ignoring case.
///
/// A missing or blank fragment matches everything and returns the list as-is.
pub fn filter_by_name(employees: Vec<Employee>, fragment: Option<&str>) -> Vec<Employee> {
    let needle = match fragment {
        Some(f) if !f.trim().is_empty() => f.to_lowercase(),
        _ => return employees,
    };

    employees
        .into_iter()
        .filter(|e| e.name.to_lowercase().contains(&needle))
        .collect()
}

/// Highest salary in the list, `0` when the list is empty.
pub fn highest_salary(employees: &[Employee]) -> i64 {
    employees.iter().map(|e| e.salary).max().unwrap_or(0)
}

/// Names of the `limit` best-paid employees, highest first.
///
/// Equal salaries keep the order in which the upstream returned them.
pub fn top_earner_names(employees: &[Employee], limit: usize) -> Vec<String> {
    let mut ranked: Vec<&Employee> = employees.iter().collect();
    // sort_by is stable
    ranked.sort_by(|a, b| b.salary.cmp(&a.salary));
    ranked
        .into_iter()
        .take(limit)
        .map(|e| e.name.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn emp(name: &str, salary: i64) -> Employee {
        Employee {
            id: format!("id-{}", name.to_lowercase().replace(' ', "-")),
            name: name.to_string(),
            salary,
            age: 30,
            title: "Engineer".to_string(),
            email: None,
        }
    }

    #[test]
    fn test_filter_is_case_insensitive_substring() {
        let list = vec![emp("Rosario O'Kon", 130_000), emp("Jane Doe", 110_000)];
        let out = filter_by_name(list.clone(), Some("ROSA"));
        assert_eq!(out, vec![list[0].clone()]);

        let out = filter_by_name(list.clone(), Some("doe"));
        assert_eq!(out, vec![list[1].clone()]);

        assert!(filter_by_name(list, Some("nobody")).is_empty());
    }

    #[test]
    fn test_filter_blank_fragment_returns_all() {
        let list = vec![emp("Alice", 1), emp("Bob", 2)];
        assert_eq!(filter_by_name(list.clone(), None), list);
        assert_eq!(filter_by_name(list.clone(), Some("")), list);
        assert_eq!(filter_by_name(list.clone(), Some("   ")), list);
    }

    #[test]
    fn test_filter_keeps_surrounding_whitespace() {
        let list = vec![emp("Jane Doe", 1), emp("Doe Jane", 2)];
        let names: Vec<String> = filter_by_name(list.clone(), Some(" doe"))
            .into_iter()
            .map(|e| e.name)
            .collect();
        assert_eq!(names, vec!["Jane Doe"]);

        let names: Vec<String> = filter_by_name(list, Some("doe "))
            .into_iter()
            .map(|e| e.name)
            .collect();
        assert_eq!(names, vec!["Doe Jane"]);
    }

    #[test]
    fn test_filter_preserves_upstream_order() {
        let list = vec![emp("Ann B", 1), emp("Zed", 2), emp("Annie", 3)];
        let names: Vec<String> = filter_by_name(list, Some("ann"))
            .into_iter()
            .map(|e| e.name)
            .collect();
        assert_eq!(names, vec!["Ann B", "Annie"]);
    }

    #[test]
    fn test_highest_salary() {
        assert_eq!(highest_salary(&[]), 0);
        let list = vec![emp("A", 50), emp("B", 70), emp("C", 60)];
        assert_eq!(highest_salary(&list), 70);
    }

    #[test]
    fn test_top_earners_limit_and_order() {
        let mut list: Vec<Employee> = (1..=10).map(|i| emp(&format!("N{i}"), i * 10)).collect();
        list.push(emp("N11", 5));
        list.push(emp("N12", 1));

        let names = top_earner_names(&list, TOP_EARNER_LIMIT);
        assert_eq!(names.len(), 10);
        assert_eq!(names[0], "N10");
        assert_eq!(names[9], "N1");
        assert!(!names.contains(&"N11".to_string()));
    }

    #[test]
    fn test_top_earners_short_list() {
        let list = vec![emp("A", 5), emp("B", 9)];
        assert_eq!(top_earner_names(&list, TOP_EARNER_LIMIT), vec!["B", "A"]);
        assert!(top_earner_names(&[], TOP_EARNER_LIMIT).is_empty());
    }

    #[test]
    fn test_top_earners_ties_keep_upstream_order() {
        let list = vec![emp("First", 100), emp("Low", 1), emp("Second", 100), emp("Third", 100)];
        assert_eq!(
            top_earner_names(&list, 3),
            vec!["First", "Second", "Third"]
        );
    }
}
