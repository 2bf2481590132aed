//! Base observation fields derived from the thing envelope.

use hvfhir_model::{Meta, ObservationShell, ObservationStatus, Thing};

/// Builds the observation shell for a thing.
///
/// The thing key id becomes the resource id and the version stamp becomes
/// `meta.versionId`. Stored things are always reported as `final`.
pub fn observation_shell(thing: &Thing) -> ObservationShell {
    let version_id = thing
        .key
        .as_ref()
        .and_then(|key| key.version_stamp.clone());
    let meta = if version_id.is_some() || thing.last_updated.is_some() {
        Some(Meta {
            version_id,
            last_updated: thing.last_updated,
        })
    } else {
        None
    };
    ObservationShell {
        id: thing.key.as_ref().map(|key| key.id.clone()),
        meta,
        status: ObservationStatus::Final,
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use hvfhir_model::{
        ApproximateDate, ApproximateDateTime, ApproximateTime, CodableValue, Exercise, ThingData,
    };

    use super::*;

    fn exercise_thing() -> Thing {
        Thing::new(ThingData::Exercise(Exercise::new(
            ApproximateDateTime::new(ApproximateDate::ymd(2022, 3, 4), ApproximateTime::new(6, 0)),
            CodableValue::text_only("Swimming"),
        )))
    }

    #[test]
    fn shell_without_key_is_bare() {
        let shell = observation_shell(&exercise_thing());
        assert_eq!(shell, ObservationShell::default());
    }

    #[test]
    fn shell_carries_key_and_version() {
        let updated = Utc.with_ymd_and_hms(2022, 3, 4, 7, 0, 0).unwrap();
        let thing = exercise_thing()
            .with_key("1f2e3d4c", Some("v-17".to_string()))
            .with_last_updated(updated);
        let shell = observation_shell(&thing);
        assert_eq!(shell.id.as_deref(), Some("1f2e3d4c"));
        let meta = shell.meta.expect("meta");
        assert_eq!(meta.version_id.as_deref(), Some("v-17"));
        assert_eq!(meta.last_updated, Some(updated));
        assert_eq!(shell.status, ObservationStatus::Final);
    }
}
