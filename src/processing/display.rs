use crate::models::PassportData;

/// Label/value pairs for showing a decoded passport, in display order.
pub fn format_for_display(data: &PassportData) -> Vec<(&'static str, String)> {
    vec![
        ("Full Name", data.full_name.clone()),
        ("Surname", data.surname.clone()),
        ("Given Names", data.given_names.clone()),
        ("Passport Number", data.passport_number.clone()),
        ("Nationality", format!("{} ({})", data.nationality, data.nationality_code)),
        ("Date of Birth", data.date_of_birth.clone()),
        ("Gender", data.gender.as_str().to_string()),
        ("Expiry Date", data.expiry_date.clone()),
        (
            "Issuing Country",
            format!("{} ({})", data.issuing_country, data.issuing_country_code),
        ),
        ("Confidence", format!("{}%", data.confidence)),
    ]
}
