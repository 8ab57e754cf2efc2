use crate::frequency::{first_mode, value_counts};
use bikeshare_types::{Column, TripTable};

/// Outcome of a statistic that depends on an optional column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stat<T> {
    Value(T),
    /// Column exists but no row carries a value
    NoData,
    /// The city's source has no such column
    Unavailable,
}

impl<T> Stat<T> {
    fn guarded(available: bool, value: impl FnOnce() -> Option<T>) -> Self {
        if !available {
            return Stat::Unavailable;
        }
        match value() {
            Some(value) => Stat::Value(value),
            None => Stat::NoData,
        }
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            Stat::Value(value) => Some(value),
            Stat::NoData | Stat::Unavailable => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserStats {
    /// Empty when no row has a user type
    pub user_types: Vec<(String, usize)>,
    pub genders: Stat<Vec<(String, usize)>>,
    pub earliest_birth_year: Stat<i32>,
    pub latest_birth_year: Stat<i32>,
    pub common_birth_year: Stat<i32>,
}

/// Each demographic statistic is checked against the table's columns on its
/// own, so a missing column only blanks the statistics that need it.
pub fn user_stats(table: &TripTable) -> UserStats {
    let user_types = value_counts(table.iter().filter_map(|trip| trip.user_type.as_deref()))
        .into_iter()
        .map(|(kind, count)| (kind.to_string(), count))
        .collect();

    let has_gender = table.has_column(Column::Gender);
    let genders = Stat::guarded(has_gender, || {
        let counts: Vec<(String, usize)> =
            value_counts(table.iter().filter_map(|trip| trip.gender.as_deref()))
                .into_iter()
                .map(|(gender, count)| (gender.to_string(), count))
                .collect();
        (!counts.is_empty()).then_some(counts)
    });

    let has_birth_year = table.has_column(Column::BirthYear);
    let birth_years = || table.iter().filter_map(|trip| trip.birth_year);

    UserStats {
        user_types,
        genders,
        earliest_birth_year: Stat::guarded(has_birth_year, || birth_years().min()),
        latest_birth_year: Stat::guarded(has_birth_year, || birth_years().max()),
        common_birth_year: Stat::guarded(has_birth_year, || first_mode(birth_years())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::fixtures::{table, table_without_demographics, trip};

    #[test]
    fn test_full_demographics() {
        let table = table(vec![
            trip(1, 2, 8).with_user_type("Subscriber").with_gender("Male").with_birth_year(1990),
            trip(1, 3, 8).with_user_type("Customer").with_birth_year(1985),
            trip(1, 4, 8).with_user_type("Subscriber").with_gender("Female").with_birth_year(1962),
            trip(1, 5, 8).with_user_type("Subscriber").with_gender("Female").with_birth_year(1985),
            trip(1, 6, 8),
        ]);

        let stats = user_stats(&table);
        assert_eq!(
            stats.user_types,
            vec![("Subscriber".to_string(), 3), ("Customer".to_string(), 1)]
        );
        assert_eq!(
            stats.genders,
            Stat::Value(vec![("Female".to_string(), 2), ("Male".to_string(), 1)])
        );
        assert_eq!(stats.earliest_birth_year, Stat::Value(1962));
        assert_eq!(stats.latest_birth_year, Stat::Value(1990));
        assert_eq!(stats.common_birth_year, Stat::Value(1985));
    }

    #[test]
    fn test_city_without_demographic_columns() {
        let table = table_without_demographics(vec![
            trip(1, 2, 8).with_user_type("Registered"),
            trip(1, 3, 8).with_user_type("Casual"),
            trip(1, 4, 8).with_user_type("Registered"),
        ]);

        let stats = user_stats(&table);
        assert_eq!(
            stats.user_types,
            vec![("Registered".to_string(), 2), ("Casual".to_string(), 1)]
        );
        assert_eq!(stats.genders, Stat::Unavailable);
        assert_eq!(stats.earliest_birth_year, Stat::Unavailable);
        assert_eq!(stats.latest_birth_year, Stat::Unavailable);
        assert_eq!(stats.common_birth_year, Stat::Unavailable);
    }

    #[test]
    fn test_one_missing_column_leaves_the_other() {
        let table = TripTable::new(
            Vec::new(),
            vec![Column::BirthYear],
            vec![trip(1, 2, 8).with_birth_year(2000)],
        );

        let stats = user_stats(&table);
        assert_eq!(stats.genders, Stat::Unavailable);
        assert_eq!(stats.earliest_birth_year, Stat::Value(2000));
        assert_eq!(stats.common_birth_year.value(), Some(&2000));
    }

    #[test]
    fn test_empty_table_has_no_data() {
        let stats = user_stats(&table(Vec::new()));
        assert!(stats.user_types.is_empty());
        assert_eq!(stats.genders, Stat::NoData);
        assert_eq!(stats.earliest_birth_year, Stat::NoData);
        assert_eq!(stats.latest_birth_year, Stat::NoData);
        assert_eq!(stats.common_birth_year, Stat::NoData);
    }

    #[test]
    fn test_empty_table_without_columns_is_unavailable() {
        let stats = user_stats(&table_without_demographics(Vec::new()));
        assert_eq!(stats.genders, Stat::Unavailable);
        assert_eq!(stats.latest_birth_year, Stat::Unavailable);
    }
}
