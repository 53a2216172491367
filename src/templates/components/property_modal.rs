use crate::domain::{Coordinates, Property};
use crate::templates::components::format::{count_or_na, grouped_number, plain_number};
use crate::templates::components::icons;
use maud::{html, Markup};

fn map_embed_url(c: &Coordinates) -> String {
    format!(
        "https://www.google.com/maps?q={},{}&hl=es;z=14&output=embed",
        c.lat, c.lng
    )
}

/// Detail overlay. Renders nothing when no property is selected.
pub fn property_modal(property: Option<&Property>, close_href: &str) -> Markup {
    let Some(property) = property else {
        return html! {};
    };

    let area = match property.area {
        Some(a) if a != 0.0 => format!("{} sqft", grouped_number(a)),
        _ => "N/A".to_string(),
    };

    html! {
        div id="property-modal"
            class="fixed inset-0 bg-black bg-opacity-50 flex justify-center items-center z-50 p-4 backdrop-blur-sm transition-opacity duration-300"
        {
            div class="bg-white rounded-xl shadow-2xl overflow-hidden max-w-4xl w-full max-h-[90vh] flex flex-col" {
                div class="flex justify-between items-center p-6 border-b border-gray-100" {
                    div {
                        h2 class="text-2xl font-bold text-gray-800" { (property.name) }
                        div class="flex items-center mt-1" {
                            span class="inline-block px-2 py-1 text-xs font-semibold bg-indigo-100 text-indigo-800 rounded-full mr-2" {
                                (property.property_type)
                            }
                            div class="flex items-center text-gray-600 text-sm" {
                                (icons::location_pin("w-4 h-4 mr-1"))
                                (property.location)
                            }
                        }
                    }
                    a href=(close_href) aria-label="Close"
                        class="p-2 rounded-full hover:bg-gray-100 transition-colors duration-200 text-gray-500 hover:text-gray-700"
                    {
                        (icons::close("w-6 h-6"))
                    }
                }

                div class="overflow-y-auto flex-1" {
                    div class="relative h-72 w-full bg-gradient-to-r from-blue-50 to-indigo-50" {
                        @if let Some(src) = &property.image {
                            img src=(src) alt=(property.name) class="w-full h-full object-cover";
                        } @else {
                            div class="absolute inset-0 flex items-center justify-center text-gray-400" {
                                (icons::image_placeholder("w-16 h-16"))
                            }
                        }
                    }

                    div class="p-6" {
                        div class="mb-6" {
                            p class="text-3xl font-bold text-indigo-600" { "$" (grouped_number(property.price)) }
                            @if let Some(per_sqft) = property.price_per_sqft.filter(|v| *v != 0.0) {
                                p class="text-sm text-gray-500" { "$" (plain_number(per_sqft)) " per sqft" }
                            }
                        }

                        div class="grid grid-cols-3 gap-4 mb-6" {
                            div class="bg-gray-50 p-3 rounded-lg text-center" {
                                p class="text-sm text-gray-500" { "Bedrooms" }
                                p class="text-lg font-semibold" { (count_or_na(property.bedrooms)) }
                            }
                            div class="bg-gray-50 p-3 rounded-lg text-center" {
                                p class="text-sm text-gray-500" { "Bathrooms" }
                                p class="text-lg font-semibold" { (count_or_na(property.bathrooms)) }
                            }
                            div class="bg-gray-50 p-3 rounded-lg text-center" {
                                p class="text-sm text-gray-500" { "Area" }
                                p class="text-lg font-semibold" { (area) }
                            }
                        }

                        div class="mb-6" {
                            h3 class="text-lg font-semibold text-gray-800 mb-2" { "Description" }
                            p class="text-gray-600 whitespace-pre-line" { (property.description) }
                        }

                        @if !property.amenities.is_empty() {
                            div class="mb-6" {
                                h3 class="text-lg font-semibold text-gray-800 mb-2" { "Amenities" }
                                div class="flex flex-wrap gap-2" {
                                    @for amenity in &property.amenities {
                                        span class="px-3 py-1 bg-gray-100 text-gray-800 rounded-full text-sm" { (amenity) }
                                    }
                                }
                            }
                        }

                        @if let Some(coords) = &property.coordinates {
                            div class="mb-6" {
                                h3 class="text-lg font-semibold text-gray-800 mb-2" { "Location" }
                                div class="rounded-lg overflow-hidden border border-gray-200" {
                                    iframe class="w-full h-64" loading="lazy" title="Google Map" src=(map_embed_url(coords)) {}
                                }
                            }
                        }
                    }
                }

                div class="p-4 border-t border-gray-100 flex justify-end space-x-3" {
                    a href=(close_href)
                        class="px-4 py-2 border border-gray-300 rounded-lg text-gray-700 hover:bg-gray-50 transition-colors duration-200"
                    {
                        "Close"
                    }
                    button type="button" class="px-6 py-2 bg-indigo-600 text-white rounded-lg hover:bg-indigo-700 transition-colors duration-200" {
                        "Contact Agent"
                    }
                }
            }
        }
    }
}
