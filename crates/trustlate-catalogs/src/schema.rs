//! The shape every language's translations must have.

use trustlate::{Catalog, Section};

#[derive(Catalog)]
pub struct Translations {
    pub main_page: MainPage,
    pub secondary_page: SecondaryPage,
    pub third_page: ThirdPage,
}

#[derive(Section)]
pub struct MainPage {
    pub title: &'static str,
    pub sub_title: &'static str,
}

#[derive(Section)]
pub struct SecondaryPage {
    pub greeting: fn(name: &str, surname: &str) -> String,
}

#[derive(Section)]
pub struct ThirdPage {
    pub one: &'static str,
    pub numbers: fn(num1: &str, num2: &str, num3: &str) -> String,
}
