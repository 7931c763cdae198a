use crate::schema::{MainPage, SecondaryPage, ThirdPage, Translations};

pub static TRANSLATIONS: Translations = Translations {
    main_page: MainPage {
        title: "Hello",
        sub_title: "World",
    },
    secondary_page: SecondaryPage { greeting },
    third_page: ThirdPage {
        one: "One",
        numbers,
    },
};

fn greeting(name: &str, surname: &str) -> String {
    format!("Hello {name} {surname}")
}

fn numbers(num1: &str, num2: &str, num3: &str) -> String {
    format!("{num1}, {num2}, {num3}")
}
