use chrono::Utc;
use subsolar::{julian_century, julian_date, SubsolarCalculator};

fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Debug)
        .init();

    let now = Utc::now();
    let jd = julian_date(&now);
    let calculator = SubsolarCalculator::default();
    let point = calculator.coordinates(&now);

    println!("{jd}");
    println!("T (centuries since J2000): {}", julian_century(jd).value());
    println!("Equation of time: {:.2} min", calculator.equation_of_time(&now));
    println!("Subsolar point: {point}");
    let greenwich = if point.is_daylight(51.4769, 0.0) {
        "daylight"
    } else {
        "darkness"
    };
    println!("Greenwich is in {greenwich}");
}
