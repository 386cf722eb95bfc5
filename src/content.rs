//! Static Page Copy
//!
//! Markdown for the public pages, rendered by `markdown::render_markdown`.

pub const HOME: &str = r#"
## Caring for your family, close to home

Same-week appointments for check-ups, vaccinations, dental care and
laboratory tests. Walk-ins are welcome during clinic hours.

| Day | Hours |
|---|---|
| Monday to Friday | 8:00 AM to 6:00 PM |
| Saturday | 8:00 AM to 12:00 NN |
| Sunday and holidays | Closed |
"#;

pub const ABOUT: &str = r#"
## About us

We are a community clinic staffed by licensed physicians, dentists, nurses
and medical technologists. Our team has served the neighbourhood for over a
decade with a focus on preventive care and clear, unhurried consultations.

Patient records are kept confidential and are only shared with your consent.
"#;

pub const SERVICES: &str = r#"
## Services

- **General consultation**: check-ups, medical certificates and referrals
- **Pediatrics**: well-baby visits and childhood immunizations
- **Dental care**: cleaning, fillings and extractions
- **Laboratory**: blood chemistry, urinalysis and drug testing
- **Vaccination**: flu, hepatitis B and travel vaccines
- **Annual physical exam**: packages for employees and students
"#;

pub const CONTACT: &str = r#"
## Contact

- Phone: [(02) 8123 4567](tel:+63281234567)
- Email: [hello@clinic.test](mailto:hello@clinic.test)
- Directions: [open in maps](https://maps.google.com/?q=clinic)

For emergencies, go to the nearest hospital emergency room.
"#;
