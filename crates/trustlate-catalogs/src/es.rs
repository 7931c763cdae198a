use crate::schema::{MainPage, SecondaryPage, ThirdPage, Translations};

pub static TRANSLATIONS: Translations = Translations {
    main_page: MainPage {
        title: "Hola",
        sub_title: "Mundo",
    },
    secondary_page: SecondaryPage { greeting },
    third_page: ThirdPage {
        one: "Uno",
        numbers,
    },
};

fn greeting(name: &str, surname: &str) -> String {
    format!("Hola {name} {surname}")
}

fn numbers(num1: &str, num2: &str, num3: &str) -> String {
    format!("{num1}, {num2}, {num3}")
}
