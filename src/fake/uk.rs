//! Ukrainian-locale fake data built on `rand`.

use chrono::{Days, Months, NaiveDate};
use rand::Rng;
use rand::seq::SliceRandom;

use super::PersonSource;
use crate::models::Gender;

const MALE_FIRST_NAMES: &[&str] = &[
    "Олександр", "Андрій", "Богдан", "Василь", "Віктор", "Володимир", "Дмитро", "Євген", "Іван", "Ігор",
    "Максим", "Микола", "Михайло", "Назар", "Олег", "Остап", "Павло", "Петро", "Роман", "Сергій",
    "Степан", "Тарас", "Юрій", "Ярослав", "Данило", "Захар", "Валентин", "Леонід", "Орест", "Святослав",
];

const FEMALE_FIRST_NAMES: &[&str] = &[
    "Олена", "Анна", "Богдана", "Валентина", "Вікторія", "Галина", "Дарина", "Євгенія", "Ірина", "Катерина",
    "Лариса", "Людмила", "Марія", "Марта", "Наталія", "Оксана", "Ольга", "Поліна", "Світлана", "Софія",
    "Тетяна", "Уляна", "Христина", "Юлія", "Ярина", "Зоряна", "Леся", "Надія", "Соломія", "Іванна",
];

/// Surnames as (male form, female form).
const LAST_NAMES: &[(&str, &str)] = &[
    ("Шевченко", "Шевченко"),
    ("Коваленко", "Коваленко"),
    ("Бондаренко", "Бондаренко"),
    ("Ткаченко", "Ткаченко"),
    ("Кравченко", "Кравченко"),
    ("Олійник", "Олійник"),
    ("Мельник", "Мельник"),
    ("Шевчук", "Шевчук"),
    ("Поліщук", "Поліщук"),
    ("Бойко", "Бойко"),
    ("Ткачук", "Ткачук"),
    ("Савчук", "Савчук"),
    ("Руденко", "Руденко"),
    ("Мороз", "Мороз"),
    ("Лисенко", "Лисенко"),
    ("Марченко", "Марченко"),
    ("Гончар", "Гончар"),
    ("Кузьменко", "Кузьменко"),
    ("Литвиненко", "Литвиненко"),
    ("Павленко", "Павленко"),
    ("Савченко", "Савченко"),
    ("Кравчук", "Кравчук"),
    ("Собко", "Собко"),
    ("Ковальчук", "Ковальчук"),
    ("Ковальський", "Ковальська"),
    ("Яворський", "Яворська"),
    ("Заболотний", "Заболотна"),
    ("Білоус", "Білоус"),
    ("Гнатюк", "Гнатюк"),
    ("Вишневський", "Вишневська"),
    ("Іваненко", "Іваненко"),
    ("Дорошенко", "Дорошенко"),
    ("Кириленко", "Кириленко"),
    ("Тимошенко", "Тимошенко"),
    ("Романюк", "Романюк"),
];

const JOBS: &[&str] = &[
    "Бухгалтер", "Інженер", "Програміст", "Менеджер з продажу", "Економіст", "Юрист", "Лікар", "Вчитель",
    "Водій", "Електрик", "Слюсар", "Кухар", "Архітектор", "Дизайнер", "Аналітик", "Логіст",
    "Маркетолог", "Секретар", "Технолог", "Агроном", "Фармацевт", "Медсестра", "Оператор", "Комірник",
    "Адміністратор", "Тестувальник", "Перекладач", "Журналіст", "Механік", "Будівельник",
];

const CITIES: &[&str] = &[
    "Київ", "Львів", "Харків", "Одеса", "Дніпро", "Запоріжжя", "Вінниця", "Полтава", "Чернігів", "Черкаси",
    "Житомир", "Суми", "Рівне", "Луцьк", "Тернопіль", "Ужгород", "Івано-Франківськ", "Чернівці",
    "Хмельницький", "Кропивницький", "Миколаїв", "Херсон", "Біла Церква", "Кременчук", "Кам'янець-Подільський",
];

const STREETS: &[&str] = &[
    "Шевченка", "Франка", "Лесі Українки", "Грушевського", "Хмельницького", "Сковороди", "Коцюбинського",
    "Стуса", "Мазепи", "Бандери", "Січових Стрільців", "Соборна", "Незалежності", "Миру", "Садова",
    "Зелена", "Центральна", "Шкільна", "Набережна", "Весняна",
];

const STREET_PREFIXES: &[&str] = &["вул.", "пров.", "просп.", "бульв."];

const EMAIL_LOGINS: &[&str] = &[
    "olena", "andrii", "bohdan", "vasyl", "iryna", "maria", "taras", "oksana", "petro", "sofiia",
    "yurii", "natalia", "dmytro", "halyna", "roman", "yulia", "mykola", "larysa", "ostap", "daryna",
];

const EMAIL_DOMAINS: &[&str] = &["gmail.com", "ukr.net", "i.ua", "meta.ua", "example.com", "email.ua"];

const PHONE_OPERATORS: &[&str] = &["44", "50", "63", "66", "67", "68", "73", "93", "95", "96", "97", "98", "99"];

/// Ukrainian-locale [`PersonSource`] backed by embedded word lists.
pub struct UkrainianFaker<R: Rng> {
    rng: R,
}

impl<R: Rng> UkrainianFaker<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    fn pick(&mut self, items: &[&str]) -> String {
        items.choose(&mut self.rng).copied().unwrap_or_default().to_string()
    }
}

impl<R: Rng> PersonSource for UkrainianFaker<R> {
    fn first_name(&mut self, gender: Gender) -> String {
        match gender {
            Gender::Male => self.pick(MALE_FIRST_NAMES),
            Gender::Female => self.pick(FEMALE_FIRST_NAMES),
        }
    }

    fn last_name(&mut self, gender: Gender) -> String {
        let (male, female) = LAST_NAMES.choose(&mut self.rng).copied().unwrap_or(("", ""));
        match gender {
            Gender::Male => male.to_string(),
            Gender::Female => female.to_string(),
        }
    }

    fn job(&mut self) -> String {
        self.pick(JOBS)
    }

    fn city(&mut self) -> String {
        self.pick(CITIES)
    }

    fn address(&mut self) -> String {
        let prefix = self.pick(STREET_PREFIXES);
        let street = self.pick(STREETS);
        let city = self.pick(CITIES);
        let building = self.rng.gen_range(1..=150);
        let postcode = self.rng.gen_range(1000..=99999);

        if self.rng.gen_bool(0.6) {
            let apartment = self.rng.gen_range(1..=300);
            format!("{prefix} {street}, {building}, кв. {apartment}\n{city}, {postcode:05}")
        } else {
            format!("{prefix} {street}, {building}\n{city}, {postcode:05}")
        }
    }

    fn phone_number(&mut self) -> String {
        let operator = self.pick(PHONE_OPERATORS);
        let a = self.rng.gen_range(0..1000);
        let b = self.rng.gen_range(0..100);
        let c = self.rng.gen_range(0..100);
        format!("+380 {operator} {a:03} {b:02} {c:02}")
    }

    fn email(&mut self) -> String {
        let login = self.pick(EMAIL_LOGINS);
        let domain = self.pick(EMAIL_DOMAINS);
        let suffix = self.rng.gen_range(1..1000);
        format!("{login}{suffix}@{domain}")
    }

    fn date_of_birth(&mut self, today: NaiveDate, min_age: u32, max_age: u32) -> NaiveDate {
        // Latest date that already gives `min_age`, earliest that still gives `max_age`.
        let years_before = |years: u32| {
            years
                .checked_mul(12)
                .and_then(|months| today.checked_sub_months(Months::new(months)))
        };
        let latest = years_before(min_age).unwrap_or(today);
        let earliest = max_age
            .checked_add(1)
            .and_then(years_before)
            .and_then(|d| d.checked_add_days(Days::new(1)))
            .unwrap_or(latest);

        let span = (latest - earliest).num_days();
        if span <= 0 {
            return latest;
        }
        let offset = self.rng.gen_range(0..=span) as u64;
        earliest.checked_add_days(Days::new(offset)).unwrap_or(latest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::age_on;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn faker(seed: u64) -> UkrainianFaker<StdRng> {
        UkrainianFaker::new(StdRng::seed_from_u64(seed))
    }

    #[test]
    fn test_date_of_birth_within_age_range() {
        let mut faker = faker(1);
        for today in [
            NaiveDate::from_ymd_opt(2024, 2, 29).unwrap(),
            NaiveDate::from_ymd_opt(2023, 3, 1).unwrap(),
            NaiveDate::from_ymd_opt(2026, 10, 19).unwrap(),
        ] {
            for _ in 0..500 {
                let birth = faker.date_of_birth(today, 17, 87);
                let age = age_on(birth, today);
                assert!((17..=87).contains(&age), "age {age} for {birth} on {today}");
            }
        }
    }

    #[test]
    fn test_date_of_birth_single_year_range() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        let mut faker = faker(2);
        for _ in 0..100 {
            assert_eq!(age_on(faker.date_of_birth(today, 30, 30), today), 30);
        }
    }

    #[test]
    fn test_date_of_birth_with_huge_ages() {
        let today = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
        let mut faker = faker(6);

        let birth = faker.date_of_birth(today, 17, 400_000_000);
        assert!(age_on(birth, today) >= 17);

        let birth = faker.date_of_birth(today, u32::MAX, u32::MAX);
        assert!(birth <= today);
    }

    #[test]
    fn test_gendered_last_names() {
        let mut male = faker(3);
        let mut female = faker(3);
        for _ in 0..50 {
            let m = male.last_name(Gender::Male);
            let f = female.last_name(Gender::Female);
            let pair = LAST_NAMES.iter().find(|(male_form, _)| *male_form == m).unwrap();
            assert_eq!(pair.1, f);
        }
    }

    #[test]
    fn test_address_spans_two_lines() {
        let mut faker = faker(4);
        let address = faker.address();
        assert_eq!(address.lines().count(), 2);
    }

    #[test]
    fn test_phone_and_email_shape() {
        let mut faker = faker(5);
        let phone = faker.phone_number();
        assert!(phone.starts_with("+380 "));
        assert_eq!(phone.split(' ').count(), 5);

        let email = faker.email();
        assert_eq!(email.matches('@').count(), 1);
    }

    #[test]
    fn test_same_seed_same_output() {
        let mut a = faker(42);
        let mut b = faker(42);
        assert_eq!(a.first_name(Gender::Female), b.first_name(Gender::Female));
        assert_eq!(a.address(), b.address());
        assert_eq!(a.email(), b.email());
    }
}
