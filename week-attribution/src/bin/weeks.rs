use std::env;

use week_attribution::{
    weeks_belonging_to_month, weeks_overlapping_month, Context, MonthKey, WeekInfo,
};

fn print_week(week: &WeekInfo, ctx: &Context) {
    print!(" - {} ({})", week.week_key(), week.label());

    if week.is_complete() {
        print!(" complete");
    } else if week.has_started(ctx) {
        print!(" ongoing");
    }

    println!()
}

fn main() {
    let ctx = Context::now();

    let month = match env::args().nth(1) {
        Some(raw) => raw.parse::<MonthKey>().unwrap_or_else(|err| panic!("{err}")),
        None => MonthKey::from_date(ctx.today()).expect("today is not in a 4-digit year"),
    };

    println!(" - month: {month}");
    println!(" - today: {}", ctx.today());
    println!("---");
    println!("Attributed weeks:");
    let attributed = weeks_belonging_to_month(month, &ctx);

    for week in &attributed {
        print!(" #{}", attributed.position(week.week_key()).unwrap_or_default());
        print_week(week, &ctx);
    }

    let overlapping = weeks_overlapping_month(month, &ctx);
    let mut elsewhere = overlapping.attributed_elsewhere().peekable();

    if elsewhere.peek().is_some() {
        println!("---");
        println!("Also shown in {month}:");

        for week in elsewhere {
            print!(" [{}]", week.attributed_month());
            print_week(week, &ctx);
        }
    }
}
