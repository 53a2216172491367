use crate::domain::{PropertyForm, PROPERTY_TYPES};
use maud::{html, Markup};

const INPUT_CLASS: &str = "w-full px-4 py-2 border border-gray-300 rounded-lg focus:ring-2 focus:ring-indigo-500 focus:border-indigo-500 transition";
const LABEL_CLASS: &str = "block text-sm font-medium text-gray-700";

/// The add-property form. Values come from `form`, so input typed before a
/// failed submission is shown again.
pub fn property_form(form: &PropertyForm, action: &str) -> Markup {
    let data = form.data();
    let submitting = form.is_submitting();

    html! {
        form method="post" action=(action) class="bg-white p-8 rounded-xl shadow-lg max-w-4xl mx-auto" {
            div class="flex items-center justify-between mb-6" {
                h2 class="text-2xl font-bold text-gray-800" { "Add New Property" }
                div class="w-12 h-1 bg-gradient-to-r from-indigo-500 to-purple-500 rounded-full" {}
            }

            div class="grid grid-cols-1 md:grid-cols-2 gap-6 mb-6" {
                div class="space-y-1" {
                    label class=(LABEL_CLASS) for="name" { "Property Name" }
                    input id="name" name="name" value=(data.name) placeholder="Luxury Villa" required class=(INPUT_CLASS);
                }

                div class="space-y-1" {
                    label class=(LABEL_CLASS) for="type" { "Property Type" }
                    select id="type" name="type" required class=(INPUT_CLASS) {
                        @for ty in PROPERTY_TYPES {
                            option value=(ty) selected[data.property_type == *ty] { (ty) }
                        }
                    }
                }

                div class="space-y-1" {
                    label class=(LABEL_CLASS) for="price" { "Price ($)" }
                    div class="relative" {
                        span class="absolute left-3 top-1/2 transform -translate-y-1/2 text-gray-500" { "$" }
                        input id="price" name="price" type="number" value=(data.price) placeholder="500000" required min="0"
                            class="w-full pl-8 pr-4 py-2 border border-gray-300 rounded-lg focus:ring-2 focus:ring-indigo-500 focus:border-indigo-500 transition";
                    }
                }

                div class="space-y-1" {
                    label class=(LABEL_CLASS) for="location" { "Location" }
                    input id="location" name="location" value=(data.location) placeholder="123 Main St, City" required class=(INPUT_CLASS);
                }

                div class="space-y-1" {
                    label class=(LABEL_CLASS) for="bedrooms" { "Bedrooms" }
                    input id="bedrooms" name="bedrooms" type="number" value=(data.bedrooms) placeholder="3" min="0" class=(INPUT_CLASS);
                }

                div class="space-y-1" {
                    label class=(LABEL_CLASS) for="bathrooms" { "Bathrooms" }
                    input id="bathrooms" name="bathrooms" type="number" value=(data.bathrooms) placeholder="2" min="0" step="0.5" class=(INPUT_CLASS);
                }

                div class="space-y-1" {
                    label class=(LABEL_CLASS) for="area" { "Area (sqft)" }
                    div class="relative" {
                        input id="area" name="area" type="number" value=(data.area) placeholder="1500" min="0"
                            class="w-full pl-4 pr-8 py-2 border border-gray-300 rounded-lg focus:ring-2 focus:ring-indigo-500 focus:border-indigo-500 transition";
                        span class="absolute right-3 top-1/2 transform -translate-y-1/2 text-gray-500" { "sqft" }
                    }
                }

                div class="space-y-1" {
                    label class=(LABEL_CLASS) for="image" { "Image URL" }
                    input id="image" name="image" value=(data.image) placeholder="https://example.com/image.jpg" required class=(INPUT_CLASS);
                }
            }

            div class="mb-6" {
                h3 class="text-lg font-semibold text-gray-800 mb-3" { "Coordinates" }
                div class="grid grid-cols-1 md:grid-cols-2 gap-6" {
                    div class="space-y-1" {
                        label class=(LABEL_CLASS) for="lat" { "Latitude" }
                        input id="lat" name="lat" type="number" value=(data.coordinates.lat) placeholder="40.7128" required step="any" class=(INPUT_CLASS);
                    }
                    div class="space-y-1" {
                        label class=(LABEL_CLASS) for="lng" { "Longitude" }
                        input id="lng" name="lng" type="number" value=(data.coordinates.lng) placeholder="-74.0060" required step="any" class=(INPUT_CLASS);
                    }
                }
            }

            div class="mb-6" {
                label class="block text-sm font-medium text-gray-700 mb-1" for="description" { "Description" }
                textarea id="description" name="description" rows="4" required class=(INPUT_CLASS)
                    placeholder="Describe the property features, amenities, and unique selling points..."
                {
                    (data.description)
                }
            }

            div class="flex justify-end" {
                @if submitting {
                    button type="submit" disabled class="px-6 py-3 rounded-lg font-medium text-white transition-all bg-indigo-400 cursor-not-allowed" {
                        "Processing..."
                    }
                } @else {
                    button type="submit" class="px-6 py-3 rounded-lg font-medium text-white transition-all bg-indigo-600 hover:bg-indigo-700 shadow-md hover:shadow-lg" {
                        "Add Property"
                    }
                }
            }
        }
    }
}
