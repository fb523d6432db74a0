#[cfg(test)]
mod tests {
    use bericht::libs::report::{calculate, TimeInputs, TimeValidationError};
    use bericht::libs::time::TimeOfDay;

    fn t(hour: u32, minute: u32) -> TimeOfDay {
        TimeOfDay::new(hour, minute).unwrap()
    }

    /// A fully chained day: arrival 07:30-08:00, work 08:00-12:30,
    /// departure 12:30-13:00.
    fn valid_inputs() -> TimeInputs {
        TimeInputs {
            ankunft_von: t(7, 30),
            ankunft_bis: t(8, 0),
            arbeit_von: t(8, 0),
            arbeit_bis: t(12, 30),
            abfahrt_von: t(12, 30),
            abfahrt_bis: t(13, 0),
            include_abfahrt: true,
        }
    }

    #[test]
    fn test_valid_chain_produces_report() {
        let report = calculate(&valid_inputs()).unwrap();

        assert_eq!(report.ankunftzeit, 30);
        assert_eq!(report.arbeitszeit, 270);
        assert_eq!(report.abfahrt, 30);
        assert_eq!(report.gesamtzeit, 330);
    }

    #[test]
    fn test_gesamtzeit_is_sum_of_components() {
        let report = calculate(&valid_inputs()).unwrap();
        assert_eq!(report.gesamtzeit, report.ankunftzeit + report.arbeitszeit + report.abfahrt);
    }

    #[test]
    fn test_departure_excluded_when_flag_off() {
        let inputs = TimeInputs {
            include_abfahrt: false,
            ..valid_inputs()
        };
        let report = calculate(&inputs).unwrap();

        assert_eq!(report.abfahrt, 0);
        assert_eq!(report.gesamtzeit, 300);
    }

    #[test]
    fn test_departure_fields_ignored_when_flag_off() {
        // Reversed departure window must not matter with the flag off.
        let inputs = TimeInputs {
            include_abfahrt: false,
            abfahrt_von: t(23, 0),
            abfahrt_bis: t(6, 0),
            ..valid_inputs()
        };
        assert!(calculate(&inputs).is_ok());
    }

    #[test]
    fn test_arrival_order_violation() {
        let inputs = TimeInputs {
            ankunft_von: t(8, 30),
            ankunft_bis: t(8, 0),
            ..valid_inputs()
        };
        let err = calculate(&inputs).unwrap_err();

        assert_eq!(err, TimeValidationError::AnkunftOrder);
        assert_eq!(err.to_string(), "Ankunft: Von darf nicht später als Bis sein.");
    }

    #[test]
    fn test_arrival_order_short_circuits_later_rules() {
        // Every other rule is violated too; rule 1 must still win.
        let inputs = TimeInputs {
            ankunft_von: t(9, 0),
            ankunft_bis: t(8, 0),
            arbeit_von: t(7, 0),
            arbeit_bis: t(7, 0),
            abfahrt_von: t(6, 0),
            abfahrt_bis: t(5, 0),
            include_abfahrt: true,
        };
        assert_eq!(calculate(&inputs).unwrap_err(), TimeValidationError::AnkunftOrder);
    }

    #[test]
    fn test_work_before_arrival_end() {
        let inputs = TimeInputs {
            ankunft_bis: t(8, 15),
            arbeit_von: t(8, 0),
            ..valid_inputs()
        };
        let err = calculate(&inputs).unwrap_err();

        assert_eq!(err, TimeValidationError::ArbeitBeforeAnkunftEnd);
        assert_eq!(err.to_string(), "Arbeitsbeginn darf nicht vor dem Ende der Ankunft liegen.");
    }

    #[test]
    fn test_zero_length_work_window_rejected() {
        let inputs = TimeInputs {
            arbeit_von: t(12, 30),
            arbeit_bis: t(12, 30),
            ankunft_von: t(12, 0),
            ankunft_bis: t(12, 30),
            ..valid_inputs()
        };
        let err = calculate(&inputs).unwrap_err();

        assert_eq!(err, TimeValidationError::ArbeitOrder);
        assert_eq!(err.to_string(), "Arbeitsbeginn muss vor dem Arbeitsende liegen.");
    }

    #[test]
    fn test_reversed_work_window_rejected() {
        let inputs = TimeInputs {
            ankunft_von: t(6, 0),
            ankunft_bis: t(6, 0),
            arbeit_von: t(14, 0),
            arbeit_bis: t(9, 0),
            include_abfahrt: false,
            ..valid_inputs()
        };
        assert_eq!(calculate(&inputs).unwrap_err(), TimeValidationError::ArbeitOrder);
    }

    #[test]
    fn test_departure_order_violation() {
        let inputs = TimeInputs {
            abfahrt_von: t(13, 0),
            abfahrt_bis: t(12, 45),
            ..valid_inputs()
        };
        let err = calculate(&inputs).unwrap_err();

        assert_eq!(err, TimeValidationError::AbfahrtOrder);
        assert_eq!(err.to_string(), "Abfahrt: Von darf nicht später als Bis sein.");
    }

    #[test]
    fn test_departure_before_work_end() {
        let inputs = TimeInputs {
            abfahrt_von: t(12, 0),
            abfahrt_bis: t(13, 0),
            ..valid_inputs()
        };
        let err = calculate(&inputs).unwrap_err();

        assert_eq!(err, TimeValidationError::AbfahrtBeforeArbeitEnd);
        assert_eq!(err.to_string(), "Abfahrt darf nicht vor dem Arbeitsende beginnen.");
    }

    #[test]
    fn test_departure_adjacent_to_work_end_is_valid() {
        // Ds == We is allowed, the rule is non-strict.
        let inputs = TimeInputs {
            abfahrt_von: t(12, 30),
            abfahrt_bis: t(12, 30),
            ..valid_inputs()
        };
        let report = calculate(&inputs).unwrap();
        assert_eq!(report.abfahrt, 0);
    }

    #[test]
    fn test_arrival_may_be_instant() {
        // Av == Ab is a zero-minute arrival, still valid.
        let inputs = TimeInputs {
            ankunft_von: t(8, 0),
            ankunft_bis: t(8, 0),
            ..valid_inputs()
        };
        let report = calculate(&inputs).unwrap();
        assert_eq!(report.ankunftzeit, 0);
    }

    #[test]
    fn test_idempotence() {
        let inputs = valid_inputs();
        assert_eq!(calculate(&inputs), calculate(&inputs));

        let invalid = TimeInputs {
            ankunft_von: t(9, 0),
            ankunft_bis: t(8, 0),
            ..valid_inputs()
        };
        assert_eq!(calculate(&invalid), calculate(&invalid));
    }
}
