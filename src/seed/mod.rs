use crate::models::{Person, TechAsset, STATUS_DECOMMISSIONED, STATUS_IN_USE};

fn person(surname: &str, firstname: &str, patronym: &str, position: &str) -> Person {
    Person {
        surname: surname.to_string(),
        firstname: firstname.to_string(),
        patronym: patronym.to_string(),
        position: position.to_string(),
    }
}

fn asset(invnumber: i64, devtype: &str, department: &str, user: Person, status: &str) -> TechAsset {
    TechAsset {
        invnumber,
        devtype: devtype.to_string(),
        department: department.to_string(),
        user,
        status: status.to_string(),
    }
}

/// The fixed collection the registry starts with. Loaded once per process;
/// records are never added or removed afterwards, only their status changes.
pub fn seed_assets() -> Vec<TechAsset> {
    vec![
        asset(
            1400001,
            "system_unit",
            "mayors_ofice",
            person("Zhigalkin", "Sergei", "Aleksandrovich", "town_mayor"),
            STATUS_IN_USE,
        ),
        asset(1400025, "system_unit", "", Person::default(), STATUS_DECOMMISSIONED),
        asset(
            1400184,
            "system_unit",
            "IT_department",
            person("Medvedev", "Aleksei", "Olegovich", "chief_expert"),
            STATUS_IN_USE,
        ),
        asset(
            1400399,
            "printing_device",
            "road_construction_department",
            Person::default(),
            STATUS_IN_USE,
        ),
        asset(1400398, "printing_device", "", Person::default(), STATUS_DECOMMISSIONED),
        asset(
            1400186,
            "uninterruptable_power_source",
            "IT_department",
            person("Mayorov", "Aleksandr", "Vladimirovich", "chief_expert"),
            STATUS_IN_USE,
        ),
        asset(1400695, "projector", "conference_hall", Person::default(), STATUS_IN_USE),
    ]
}
