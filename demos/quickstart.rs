use telisaran::{DateTime, Period};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let dt = DateTime::new(3, 3206, 8, 11, 18, 45, 30)?;
    let offset = dt.offset();

    println!("offset:  {offset}");
    println!("back:    {}", DateTime::from_offset(offset)?);
    println!("time:    {}", dt.time());
    println!("words:   {}", dt.time_long());
    println!("numeric: {}", dt.numeric());
    println!("date:    {}", dt.date());
    println!("long:    {}", dt.long());

    let festival = DateTime::new(3, 3206, 9, 1, 0, 0, 0)?;
    let wait = Period::new(dt, festival);
    println!(
        "{:.2} days until {}",
        wait.duration_days().value(),
        festival.season()
    );
    Ok(())
}
