//! Forecast Components
//!
//! Current conditions and one panel per forecast day.

use leptos::prelude::*;
use place_weather_core::{
    format_celsius, format_day_heading, format_humidity, format_wind_speed, CurrentConditions, DailyForecast, Weather,
};

#[component]
pub fn Forecast(weather: Weather) -> impl IntoView {
    if weather.is_empty() {
        return view! { <p class="no-forecast">"No forecast available"</p> }.into_any();
    }

    let Weather { current, daily_forecast } = weather;

    view! {
        {current.map(|now| view! { <CurrentSummary now=now /> })}
        <div class="forecast">
            {daily_forecast
                .into_iter()
                .map(|day| view! { <ForecastDay day=day /> })
                .collect_view()}
        </div>
    }
    .into_any()
}

#[component]
fn CurrentSummary(now: CurrentConditions) -> impl IntoView {
    view! {
        <p class="current-conditions">
            <strong>"Now: "</strong>
            {format!(
                "{}, {} · humidity {} · wind {}",
                format_celsius(now.temperature),
                now.description,
                format_humidity(now.humidity),
                format_wind_speed(now.wind_speed),
            )}
        </p>
    }
}

#[component]
fn ForecastDay(day: DailyForecast) -> impl IntoView {
    let heading = format_day_heading(&day.date);

    view! {
        <div class="day">
            <h3 title=day.date.clone()>{heading}</h3>
            <div class="weather-details">
                <p><strong>"Temperature:"</strong>" "{format_celsius(day.temperature.day)}</p>
                <p><strong>"Min:"</strong>" "{format_celsius(day.temperature.min)}</p>
                <p><strong>"Max:"</strong>" "{format_celsius(day.temperature.max)}</p>
                <p><strong>"Description:"</strong>" "{day.description}</p>
                <p><strong>"Humidity:"</strong>" "{format_humidity(day.humidity)}</p>
                <p><strong>"Wind Speed:"</strong>" "{format_wind_speed(day.wind_speed)}</p>
            </div>
        </div>
    }
}
