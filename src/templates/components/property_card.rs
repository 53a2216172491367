use crate::domain::Property;
use crate::templates::components::format::{count_or_na, plain_number};
use crate::templates::components::icons;
use maud::{html, Markup};

/// Summary card. `view_href` selects this property and opens the modal.
pub fn property_card(property: &Property, view_href: &str) -> Markup {
    let area = match property.area {
        Some(a) if a != 0.0 => format!("{} sqft", plain_number(a)),
        _ => "N/A".to_string(),
    };

    html! {
        div class="relative border border-gray-200 rounded-xl p-5 w-full bg-white shadow-lg hover:shadow-xl transition-shadow duration-300 overflow-hidden group"
            data-property-id=(property.id.as_str())
        {
            div class="absolute top-4 right-4 bg-indigo-600 text-white text-xs font-semibold px-3 py-1 rounded-full z-10" {
                (property.property_type)
            }

            div class="relative h-48 w-full rounded-lg overflow-hidden mb-4 bg-gradient-to-r from-blue-50 to-indigo-50" {
                div class="absolute inset-0 flex items-center justify-center text-gray-400" {
                    (icons::image_placeholder("w-12 h-12"))
                }
            }

            div class="flex items-center text-gray-600 mb-2" {
                (icons::location_pin("w-4 h-4 mr-1"))
                span class="text-sm" { (property.location) }
            }

            h2 class="text-xl font-bold text-gray-800 mb-2 group-hover:text-indigo-600 transition-colors duration-200" {
                (property.name)
            }

            div class="flex items-end mb-3" {
                span class="text-2xl font-bold text-indigo-600" { "$" (plain_number(property.price)) }
                @if let Some(per_sqft) = property.price_per_sqft.filter(|v| *v != 0.0) {
                    span class="text-xs text-gray-500 ml-1" { "/ $" (plain_number(per_sqft)) " sqft" }
                }
            }

            p class="text-gray-600 text-sm mb-5 line-clamp-2" { (property.description) }

            div class="border-t border-gray-100 my-4" {}

            div class="grid grid-cols-3 gap-2 mb-5" {
                div class="flex flex-col items-center" {
                    span class="text-xs text-gray-500" { "Beds" }
                    span class="font-semibold" { (count_or_na(property.bedrooms)) }
                }
                div class="flex flex-col items-center" {
                    span class="text-xs text-gray-500" { "Baths" }
                    span class="font-semibold" { (count_or_na(property.bathrooms)) }
                }
                div class="flex flex-col items-center" {
                    span class="text-xs text-gray-500" { "Area" }
                    span class="font-semibold" { (area) }
                }
            }

            a href=(view_href)
                class="w-full py-3 px-4 bg-gradient-to-r from-indigo-600 to-indigo-500 text-white font-medium rounded-lg hover:from-indigo-700 hover:to-indigo-600 transition-all duration-300 flex items-center justify-center"
            {
                "View Details"
                (icons::arrow_right("w-4 h-4 ml-2"))
            }
        }
    }
}
