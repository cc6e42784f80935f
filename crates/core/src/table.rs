use crate::instance::InstanceInfo;

const HEADERS: [&str; 5] = ["Name", "Private IP", "Public IP", "AZ", "State"];
const WIDTHS: [usize; 5] = [30, 20, 20, 20, 15];

/// Render the inventory as a fixed-width table, one row per instance in
/// response order. Cells wider than their column are not truncated.
pub fn render(instances: &[InstanceInfo]) -> String {
    let border = "-".repeat(WIDTHS.iter().sum::<usize>() + WIDTHS.len() - 1);

    let mut table = String::new();
    table.push_str(&border);
    table.push('\n');
    table.push_str(&format_row(HEADERS));
    table.push('\n');
    table.push_str(&border);
    table.push('\n');

    for instance in instances {
        let row = format_row([
            instance.display_name().unwrap_or_default(),
            &instance.private_ip,
            &instance.public_ip,
            &instance.availability_zone,
            &instance.state,
        ]);
        table.push_str(&row);
        table.push('\n');
    }

    table.push_str(&border);
    table.push('\n');
    table
}

fn format_row(columns: [&str; 5]) -> String {
    let mut row = String::new();
    for (column, width) in columns.iter().zip(WIDTHS) {
        row.push_str(&format!("{column:<width$}"));
    }
    row
}
