use bikeshare_testing::TestWorld;
use bikeshare_testing::fixtures::{CHICAGO_CSV, WASHINGTON_CSV};
use bikeshare_types::City;
use std::fs;

#[test]
fn test_config_points_a_city_at_another_file() {
    let world = TestWorld::new()
        .with_city_csv(City::Chicago, CHICAGO_CSV)
        .with_config("[cities.washington]\nfile = \"dc/trips-2017.csv\"\n");
    fs::create_dir_all(world.data_dir().join("dc")).unwrap();
    fs::write(world.data_dir().join("dc/trips-2017.csv"), WASHINGTON_CSV).unwrap();

    let result = world.run("washington\nall\nall\nno\nno\n").unwrap();
    assert!(result.success(), "stderr: {}", result.stderr());
    assert!(result.stdout().contains("Loaded 5 trips for Washington"));
}

#[test]
fn test_config_renames_columns() {
    let csv = "\
Started,Seconds,From,To,Rider
2017-04-03 07:15:00,600,Elm St,Oak St,Member
2017-04-04 07:45:00,300,Elm St,Pine St,Member
";
    let world = TestWorld::new()
        .with_city_csv(City::Chicago, csv)
        .with_config(
            "[columns]\n\
             start_time = \"Started\"\n\
             trip_duration = \"Seconds\"\n\
             start_station = \"From\"\n\
             end_station = \"To\"\n\
             user_type = \"Rider\"\n",
        );

    let result = world.run("chicago\nall\nall\nno\nno\n").unwrap();
    assert!(result.success(), "stderr: {}", result.stderr());

    let stdout = result.stdout();
    assert!(stdout.contains("Loaded 2 trips for Chicago"));
    assert!(stdout.contains("The most popular start station was Elm St"));
    assert!(stdout.contains("The total trip duration of the selected period was 15.0 min"));
    assert!(stdout.contains("Gender: data not available for this city"));
}

#[test]
fn test_explicit_config_path() {
    let world = TestWorld::new().with_city_csv(City::Chicago, CHICAGO_CSV);
    let config_path = world.temp_dir().join("elsewhere.toml");
    let chicago_path = world.data_dir().join(City::Chicago.default_file());
    fs::write(
        &config_path,
        format!(
            "[cities.\"new york city\"]\nfile = \"{}\"\n",
            chicago_path.display()
        ),
    )
    .unwrap();

    let config_arg = config_path.to_string_lossy().to_string();
    let result = world
        .run_with_args(&["--config", &config_arg], "new york city\nall\nall\nno\nno\n")
        .unwrap();
    assert!(result.success(), "stderr: {}", result.stderr());
    assert!(result.stdout().contains("Loaded 8 trips for New York City"));
}

#[test]
fn test_debug_logging_goes_to_stderr() {
    let world = TestWorld::new().with_sample_cities();

    let result = world
        .run_with_args(&["--log-level", "debug"], "chicago\nall\nall\nno\nno\n")
        .unwrap();
    assert!(result.success());
    assert!(result.stderr().contains("configuration loaded"));
    assert!(!result.stdout().contains("configuration loaded"));
}

#[test]
fn test_rust_log_overrides_log_level() {
    let world = TestWorld::new()
        .with_sample_cities()
        .with_env("RUST_LOG", "info");

    let result = world.run("chicago\nall\nall\nno\nno\n").unwrap();
    assert!(result.success());
    assert!(result.stderr().contains("starting session"));
    assert!(!result.stderr().contains("configuration loaded"));
}
