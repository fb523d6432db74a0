#[cfg(test)]
mod tests {
    use bericht::libs::employee::{Employee, EmployeeSelection};

    fn roster() -> Vec<Employee> {
        vec![
            Employee {
                id: 1,
                name: "Anna Schmidt".to_string(),
            },
            Employee {
                id: 2,
                name: "Jonas Weber".to_string(),
            },
        ]
    }

    #[test]
    fn test_empty_selection() {
        let selection = EmployeeSelection::default();
        assert_eq!(selection.count(), 0);
        assert!(!selection.has_employees());
    }

    #[test]
    fn test_add_from_roster() {
        let mut selection = EmployeeSelection::default();
        assert!(selection.add_from_roster(roster()[0].clone()));

        assert_eq!(selection.count(), 1);
        assert_eq!(selection.selected[0].name, "Anna Schmidt");
    }

    #[test]
    fn test_duplicate_roster_pick_rejected() {
        let mut selection = EmployeeSelection::default();
        assert!(selection.add_from_roster(roster()[0].clone()));
        assert!(!selection.add_from_roster(roster()[0].clone()));

        assert_eq!(selection.count(), 1);
    }

    #[test]
    fn test_available_hides_selected_entries() {
        let roster = roster();
        let mut selection = EmployeeSelection::default();
        selection.add_from_roster(roster[0].clone());

        let available = selection.available(&roster);
        assert_eq!(available.len(), 1);
        assert_eq!(available[0].id, 2);
    }

    #[test]
    fn test_custom_ids_decrease_from_minus_one() {
        let mut selection = EmployeeSelection::default();

        let first = selection.add_custom("Praktikant Max").unwrap().id;
        let second = selection.add_custom("Aushilfe Lena").unwrap().id;

        assert_eq!(first, -1);
        assert_eq!(second, -2);
    }

    #[test]
    fn test_custom_name_is_trimmed() {
        let mut selection = EmployeeSelection::default();
        let employee = selection.add_custom("  Max  ").unwrap();
        assert_eq!(employee.name, "Max");
    }

    #[test]
    fn test_custom_empty_name_rejected() {
        let mut selection = EmployeeSelection::default();
        assert!(selection.add_custom("   ").is_none());
        assert_eq!(selection.count(), 0);
    }

    #[test]
    fn test_remove_by_id() {
        let mut selection = EmployeeSelection::default();
        assert!(selection.add_from_roster(roster()[0].clone()));
        selection.add_custom("Max").unwrap();

        let removed = selection.remove(-1).unwrap();
        assert_eq!(removed.name, "Max");
        assert_eq!(selection.count(), 1);

        assert!(selection.remove(99).is_none());
    }

    #[test]
    fn test_counter_survives_removal() {
        // Removing a custom employee must not recycle its id.
        let mut selection = EmployeeSelection::default();
        selection.add_custom("Max").unwrap();
        selection.remove(-1).unwrap();

        let next = selection.add_custom("Lena").unwrap().id;
        assert_eq!(next, -2);
    }
}
