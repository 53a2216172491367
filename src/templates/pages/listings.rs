use crate::listings::ListingsPage;
use crate::templates::components::{
    error_banner, icons, property_card, property_form, property_modal,
};
use crate::templates::desktop_layout;
use maud::{html, Markup};

fn found_label(count: usize) -> String {
    let noun = if count == 1 { "property" } else { "properties" };
    format!("{count} {noun} found")
}

pub fn listings_page(page: &ListingsPage) -> Markup {
    let filtered = page.filtered();
    let types = page.property_types();
    let filters_active = page.filter.is_active();
    let form_action = page.form_action();
    let selected_type =
        |ty: &str| !page.filter.property_type.is_empty() && page.filter.selects_type(ty);

    desktop_layout(
        "Property Listings",
        html! {
            div class="min-h-screen bg-gray-50 p-4 md:p-8" {
                div class="max-w-7xl mx-auto" {
                    div class="flex flex-col md:flex-row justify-between items-start md:items-center mb-8" {
                        div {
                            h1 class="text-3xl md:text-4xl font-bold text-gray-800" { "Property Listings" }
                            p class="text-gray-600 mt-2" id="result-count" { (found_label(filtered.len())) }
                        }
                        a href=(page.toggle_form_href())
                            class="mt-4 md:mt-0 px-6 py-3 bg-indigo-600 text-white rounded-lg hover:bg-indigo-700 transition-colors duration-200 shadow-md hover:shadow-lg flex items-center"
                        {
                            (icons::plus("w-5 h-5 mr-2"))
                            @if page.show_form() { "Cancel" } @else { "Add Property" }
                        }
                    }

                    @if page.show_form() {
                        div class="mb-8" {
                            (property_form(&page.form, &form_action))
                        }
                    }

                    div class="bg-white p-4 md:p-6 rounded-xl shadow-sm mb-8" {
                        form method="get" action="/" class="grid grid-cols-1 md:grid-cols-3 gap-4" {
                            @if page.show_form() {
                                input type="hidden" name="form" value="1";
                            }
                            div class="relative" {
                                div class="absolute inset-y-0 left-0 pl-3 flex items-center pointer-events-none" {
                                    (icons::search("w-5 h-5 text-gray-400"))
                                }
                                input type="text" name="search" value=(page.filter.search)
                                    placeholder="Search properties..."
                                    class="pl-10 pr-4 py-3 w-full border border-gray-300 rounded-lg focus:ring-2 focus:ring-indigo-500 focus:border-indigo-500 transition";
                            }

                            select name="type" onchange="this.form.submit()"
                                class="px-4 py-3 border border-gray-300 rounded-lg focus:ring-2 focus:ring-indigo-500 focus:border-indigo-500 transition"
                            {
                                option value="" selected[page.filter.property_type.is_empty()] { "All Property Types" }
                                @for ty in &types {
                                    option value=(ty) selected[selected_type(*ty)] { (ty) }
                                }
                            }

                            a href=(page.clear_filters_href())
                                class="px-4 py-3 border border-gray-300 rounded-lg hover:bg-gray-50 transition-colors duration-200 text-gray-700 text-center"
                            {
                                "Clear Filters"
                            }
                        }
                    }

                    @if let Some(message) = page.error() {
                        (error_banner(message))
                    }

                    @if page.is_loading() {
                        div class="flex justify-center items-center py-12" {
                            div class="animate-spin rounded-full h-12 w-12 border-t-2 border-b-2 border-indigo-500" {}
                        }
                    } @else {
                        div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6" {
                            @if filtered.is_empty() {
                                div class="col-span-full text-center py-12" {
                                    (icons::sad_face("mx-auto h-12 w-12 text-gray-400"))
                                    h3 class="mt-2 text-lg font-medium text-gray-900" { "No properties found" }
                                    p class="mt-1 text-gray-500" {
                                        @if filters_active {
                                            "Try adjusting your search or filter"
                                        } @else {
                                            "There are currently no properties listed"
                                        }
                                    }
                                    @if filters_active {
                                        a href=(page.clear_filters_href())
                                            class="mt-4 inline-flex items-center px-4 py-2 border border-transparent text-sm font-medium rounded-md shadow-sm text-white bg-indigo-600 hover:bg-indigo-700"
                                        {
                                            "Clear filters"
                                        }
                                    }
                                }
                            } @else {
                                @for property in &filtered {
                                    (property_card(property, &page.select_href(&property.id)))
                                }
                            }
                        }
                    }

                    (property_modal(page.selected_property(), &page.close_modal_href()))
                }
            }
        },
    )
}
