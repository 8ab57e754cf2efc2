//! Sample trip data shaped like the real city exports.
//!
//! - Chicago and New York City carry `Gender` and `Birth Year`
//! - Washington has neither and uses fractional trip durations

use anyhow::Result;
use bikeshare_types::City;
use std::fs;
use std::path::{Path, PathBuf};

/// 8 trips. January is the busiest month (3), "Theater on the Lake" the
/// busiest start station, birth years tie between 1992 and 1990 (1992 first).
pub const CHICAGO_CSV: &str = "\
,Start Time,End Time,Trip Duration,Start Station,End Station,User Type,Gender,Birth Year
1423854,2017-06-23 15:09:32,2017-06-23 15:14:53,321,Wood St & Hubbard St,Damen Ave & Chicago Ave,Subscriber,Male,1992.0
955915,2017-05-25 18:19:03,2017-05-25 18:45:53,1610,Theater on the Lake,Sheffield Ave & Waveland Ave,Subscriber,Female,1992.0
9031,2017-01-04 08:27:49,2017-01-04 08:34:45,416,May St & Taylor St,Wood St & Taylor St,Subscriber,Male,1981.0
304487,2017-03-06 13:49:38,2017-03-06 13:55:28,350,Christiana Ave & Lawrence Ave,St. Louis Ave & Balmoral Ave,Subscriber,Male,1986.0
45207,2017-01-17 14:53:07,2017-01-17 15:02:01,534,Clark St & Randolph St,Desplaines St & Jackson Blvd,Subscriber,Male,1975.0
1473887,2017-06-26 09:01:20,2017-06-26 09:11:06,586,Clinton St & Washington Blvd,Canal St & Taylor St,Subscriber,Male,1990.0
961916,2017-05-26 09:41:44,2017-05-26 09:46:25,281,Damen Ave & Chicago Ave,Damen Ave & Cortland St,Subscriber,Male,1990.0
65924,2017-01-21 14:28:38,2017-01-21 14:40:41,723,Theater on the Lake,Sheffield Ave & Waveland Ave,Customer,,
";

/// 3 trips, one per month (March, May, June).
pub const NEW_YORK_CITY_CSV: &str = "\
,Start Time,End Time,Trip Duration,Start Station,End Station,User Type,Gender,Birth Year
5688089,2017-06-11 14:55:05,2017-06-11 15:08:21,795,Suffolk St & Stanton St,W Broadway & Spring St,Subscriber,Male,1998.0
4096714,2017-05-11 15:30:11,2017-05-11 15:41:43,692,Lexington Ave & E 63 St,1 Ave & E 78 St,Subscriber,Male,1981.0
2173887,2017-03-29 13:26:26,2017-03-29 13:48:31,1325,1 Pl & Clinton St,Henry St & Degraw St,Customer,Female,1987.0
";

/// 5 trips, two of them on a Saturday. No demographic columns.
pub const WASHINGTON_CSV: &str = "\
,Start Time,End Time,Trip Duration,Start Station,End Station,User Type
1621326,2017-06-21 08:36:34,2017-06-21 08:44:43,489.066,14th & Belmont St NW,15th & K St NW,Subscriber
482740,2017-03-11 10:40:00,2017-03-11 10:46:00,402.549,Yuma St & Tenley Circle NW,Connecticut Ave & Yuma St NW,Subscriber
1330037,2017-05-30 01:02:59,2017-05-30 01:13:37,637.251,17th St & Massachusetts Ave NW,5th & K St NW,Subscriber
665458,2017-04-02 07:48:35,2017-04-02 08:19:03,1827.341,Constitution Ave & 2nd St NW/DOL,M St & New Jersey Ave SE,Customer
1481135,2017-06-10 08:36:28,2017-06-10 09:02:17,1549.427,Henry Bacon Dr & Lincoln Memorial Circle NW,Maine Ave & 7th St SW,Subscriber
";

pub fn sample_csv(city: City) -> &'static str {
    match city {
        City::Chicago => CHICAGO_CSV,
        City::NewYorkCity => NEW_YORK_CITY_CSV,
        City::Washington => WASHINGTON_CSV,
    }
}

/// Write `content` as the city's default file inside `data_dir`.
pub fn write_city_csv(data_dir: &Path, city: City, content: &str) -> Result<PathBuf> {
    let path = data_dir.join(city.default_file());
    fs::write(&path, content)?;
    Ok(path)
}

/// Write the bundled sample for every city.
pub fn write_sample_cities(data_dir: &Path) -> Result<()> {
    for city in City::ALL {
        write_city_csv(data_dir, city, sample_csv(city))?;
    }
    Ok(())
}
