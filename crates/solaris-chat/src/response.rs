//! Reply texts.
//!
//! Every user-visible string the bot sends is built here. Attribute values are
//! passed in raw and normalized on the way out.

use solaris_core::types::{
    PlanetAttribute, SmallBodyAttribute, SubjectKind, SunAttribute, PLANET_NAMES,
};

use crate::normalize::normalize;

pub const GREETING: &str = "Привет! Я — бот о Солнечной системе 🌞🪐\n\
Вот, что ты можешь узнать:\n\
- Напиши \"Солнце\", чтобы получить параметры\n\
- Напиши \"Меркурий\", \"Земля\", ..., \"Нептун\" для информации о планете\n\
- Напиши \"Астероиды\", \"Кометы\"";

pub const SUN_MENU: &str = "Про Солнце можно узнать:\n\
- площадь поверхности\n\
- объем\n\
- температура ядра\n\
- масса\n\
- диаметр";

pub const SMALL_BODY_LIST: &str = "Малые небесные тела:\n\
- C/2024 G3 (комета)\n\
- 2022 YO1 (астероид)\n\
- 2011 CQ1 (астероид)\n\
\n\
Напиши название объекта, чтобы выбрать параметр.";

pub const NOT_FOUND: &str = "Информация не найдена.";
pub const RETRY: &str = "Неизвестный параметр. Попробуй ещё раз.";
pub const FALLBACK: &str = "Не понял запрос. Напиши /start, чтобы посмотреть доступные команды.";
pub const FAILURE: &str = "Сервис временно недоступен. Попробуй позже.";

// =============================================================================
// Menus and listings
// =============================================================================

pub fn planet_menu(planet: &str) -> String {
    format!(
        "Про {planet} можно узнать:\n\
         - Орбитальная скорость\n\
         - Период вращения\n\
         - Число спутников\n\
         - Тип\n\
         - Масса"
    )
}

pub fn small_body_menu(designation: &str) -> String {
    format!(
        "Про {designation} можно узнать:\n\
         - Орбитальный период (лет)\n\
         - Длительность наблюдений (дней)"
    )
}

pub fn planet_list() -> String {
    format!("Планеты Солнечной системы:\n{}", PLANET_NAMES.join("\n"))
}

/// Reply when the active subject vanished from the catalog.
pub fn lost_context(kind: SubjectKind) -> &'static str {
    match kind {
        SubjectKind::Sun => "Ошибка: данные о Солнце потеряны.",
        SubjectKind::Planet => "Ошибка: данные о планете потеряны.",
        SubjectKind::SmallBody => "Ошибка: данные о теле потеряны.",
    }
}

// =============================================================================
// Attribute answers
// =============================================================================

pub fn sun_answer(attribute: SunAttribute, raw: Option<&str>) -> String {
    let value = normalize(raw);
    match attribute {
        SunAttribute::SurfaceArea => format!("Площадь поверхности Солнца: {value} м²"),
        SunAttribute::Volume => format!("Объем Солнца: {value} м³"),
        SunAttribute::CoreTemperature => format!("Температура ядра Солнца: {value} K"),
        SunAttribute::Mass => format!("Масса Солнца: {value} кг"),
        SunAttribute::Diameter => format!("Диаметр Солнца: {value} м"),
    }
}

pub fn planet_answer(planet: &str, attribute: PlanetAttribute, raw: Option<&str>) -> String {
    let value = normalize(raw);
    match attribute {
        PlanetAttribute::OrbitalVelocity => {
            format!("Орбитальная скорость, {planet}: {value} км/с")
        }
        PlanetAttribute::RotationPeriod => format!("Период вращения, {planet}: {value} дней"),
        PlanetAttribute::MoonCount => format!("Число спутников, {planet}: {value}"),
        PlanetAttribute::Type => format!("Тип планеты, {planet}: {value}"),
        PlanetAttribute::Mass => format!("Масса, {planet}: {value} кг"),
    }
}

pub fn small_body_answer(
    designation: &str,
    attribute: SmallBodyAttribute,
    raw: Option<&str>,
) -> String {
    let value = normalize(raw);
    match attribute {
        SmallBodyAttribute::OrbitalPeriod => {
            format!("Орбитальный период {designation}: {value} лет")
        }
        SmallBodyAttribute::ObservationArc => {
            format!("Длительность наблюдений за {designation}: {value} дней")
        }
    }
}
