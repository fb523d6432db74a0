//! Time interval validation and duration calculation.
//!
//! This is the calculation core of the application. A Servicebericht
//! covers up to three time windows of a single day, chained in
//! chronological order:
//!
//! 1. **Ankunft** — the arrival window (Von/Bis)
//! 2. **Arbeit** — the work window (Von/Bis)
//! 3. **Abfahrt** — the optional departure window (Von/Bis)
//!
//! [`calculate`] checks the ordering and adjacency of the windows and,
//! when every rule holds, derives the [`Report`] with the three
//! durations and their total. The first violated rule wins; later rules
//! are not evaluated, so the user always sees one message describing
//! the earliest problem in the day.
//!
//! The function is pure and synchronous: same inputs, same output, no
//! state between calls. Callers re-run it whenever any time input or
//! the departure flag changes.
//!
//! ## Known limitation
//!
//! All times are same-day wall-clock minutes. A shift running past
//! midnight makes the windows appear reversed and is rejected as an
//! ordering violation; crossing midnight is not supported.

use crate::libs::time::TimeOfDay;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A violated ordering or adjacency rule.
///
/// The display text is the exact message shown to the user; the
/// wording is part of the product and stays German.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum TimeValidationError {
    /// Rule 1: the arrival window must not end before it starts.
    #[error("Ankunft: Von darf nicht später als Bis sein.")]
    AnkunftOrder,

    /// Rule 2: work must not start before the arrival window ends.
    #[error("Arbeitsbeginn darf nicht vor dem Ende der Ankunft liegen.")]
    ArbeitBeforeAnkunftEnd,

    /// Rule 3: the work window must have positive length.
    #[error("Arbeitsbeginn muss vor dem Arbeitsende liegen.")]
    ArbeitOrder,

    /// Rule 4a: the departure window must not end before it starts.
    #[error("Abfahrt: Von darf nicht später als Bis sein.")]
    AbfahrtOrder,

    /// Rule 4b: departure must not start before the work window ends.
    #[error("Abfahrt darf nicht vor dem Arbeitsende beginnen.")]
    AbfahrtBeforeArbeitEnd,
}

/// Raw time inputs of one Servicebericht.
///
/// The departure fields are carried even when `include_abfahrt` is
/// false; they are simply ignored then, mirroring how the form keeps
/// its fields when the toggle is off.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeInputs {
    pub ankunft_von: TimeOfDay,
    pub ankunft_bis: TimeOfDay,
    pub arbeit_von: TimeOfDay,
    pub arbeit_bis: TimeOfDay,
    pub abfahrt_von: TimeOfDay,
    pub abfahrt_bis: TimeOfDay,
    pub include_abfahrt: bool,
}

/// Validated duration report, all values in whole minutes.
///
/// Invariants: every component is >= 0 and
/// `gesamtzeit == ankunftzeit + arbeitszeit + abfahrt`. A `Report` only
/// exists for inputs that passed validation; there is no partially
/// filled variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    /// Arrival duration (Ankunft Bis - Von).
    pub ankunftzeit: i64,
    /// Work duration (Arbeit Bis - Von), always > 0.
    pub arbeitszeit: i64,
    /// Departure duration, 0 when departure tracking is off.
    pub abfahrt: i64,
    /// Sum of the enabled components.
    pub gesamtzeit: i64,
}

/// Validates the time windows and computes the duration report.
///
/// Rules are checked in a fixed order and the first violation is
/// returned immediately:
///
/// 1. Ankunft Von <= Ankunft Bis
/// 2. Ankunft Bis <= Arbeit Von
/// 3. Arbeit Von < Arbeit Bis (strict, a zero-length work window is invalid)
/// 4. only with `include_abfahrt`:
///    a. Abfahrt Von <= Abfahrt Bis
///    b. Abfahrt Von >= Arbeit Bis (starting exactly at the work end is valid)
pub fn calculate(inputs: &TimeInputs) -> Result<Report, TimeValidationError> {
    let ankunft_von = inputs.ankunft_von.minutes_of_day();
    let ankunft_bis = inputs.ankunft_bis.minutes_of_day();
    let arbeit_von = inputs.arbeit_von.minutes_of_day();
    let arbeit_bis = inputs.arbeit_bis.minutes_of_day();

    if ankunft_von > ankunft_bis {
        return Err(TimeValidationError::AnkunftOrder);
    }

    if ankunft_bis > arbeit_von {
        return Err(TimeValidationError::ArbeitBeforeAnkunftEnd);
    }

    if arbeit_von >= arbeit_bis {
        return Err(TimeValidationError::ArbeitOrder);
    }

    let mut abfahrt = 0;

    if inputs.include_abfahrt {
        let abfahrt_von = inputs.abfahrt_von.minutes_of_day();
        let abfahrt_bis = inputs.abfahrt_bis.minutes_of_day();

        if abfahrt_von > abfahrt_bis {
            return Err(TimeValidationError::AbfahrtOrder);
        }

        if abfahrt_von < arbeit_bis {
            return Err(TimeValidationError::AbfahrtBeforeArbeitEnd);
        }

        abfahrt = abfahrt_bis - abfahrt_von;
    }

    let ankunftzeit = ankunft_bis - ankunft_von;
    let arbeitszeit = arbeit_bis - arbeit_von;

    Ok(Report {
        ankunftzeit,
        arbeitszeit,
        abfahrt,
        gesamtzeit: ankunftzeit + arbeitszeit + abfahrt,
    })
}
