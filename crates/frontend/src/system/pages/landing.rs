use leptos::prelude::*;
use thaw::Card;

use crate::shared::icons::icon;

fn current_year() -> u32 {
    js_sys::Date::new_0().get_full_year()
}

/// Public marketing page shown at `/` for unauthenticated visitors.
#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <div class="landing">
            <header class="landing__header">
                <div>
                    <div class="landing__brand">"Meridian Cargo"</div>
                    <div class="landing__tagline">"Sea & Air Logistics Platform"</div>
                </div>
            </header>

            <main class="landing__main">
                <section class="landing__hero">
                    <div class="landing__hero-copy">
                        <h1>"Logistics made reliable and transparent"</h1>
                        <p>
                            "Streamline shipment tracking, inventory management and claims \
                             with a secure platform built for businesses operating across \
                             Ghana and beyond."
                        </p>
                        <a class="btn-primary" href="/login">"Start"</a>

                        <ul class="landing__features">
                            <li>
                                {icon("truck")}
                                <div>
                                    <div class="landing__feature-title">"Shipment Visibility"</div>
                                    <div>"Track sea and air cargo end-to-end."</div>
                                </div>
                            </li>
                            <li>
                                {icon("shield")}
                                <div>
                                    <div class="landing__feature-title">"Enterprise-grade Security"</div>
                                    <div>"Role-based access & encrypted data."</div>
                                </div>
                            </li>
                            <li>
                                {icon("calendar")}
                                <div>
                                    <div class="landing__feature-title">"Scheduling & ETA"</div>
                                    <div>"Plan and forecast delivery windows."</div>
                                </div>
                            </li>
                            <li>
                                {icon("users")}
                                <div>
                                    <div class="landing__feature-title">"Team Collaboration"</div>
                                    <div>"Manage users, roles and workflows."</div>
                                </div>
                            </li>
                        </ul>
                    </div>

                    <div class="landing__snapshot">
                        <Card>
                            <div class="snapshot__caption">"Operational snapshot"</div>
                            <div class="snapshot__route">
                                <div>
                                    <div class="snapshot__label">"Route"</div>
                                    <div class="snapshot__value">"China - Ghana"</div>
                                </div>
                                <div>
                                    <div class="snapshot__label">"ETA"</div>
                                    <div class="snapshot__value">"3d 14h"</div>
                                </div>
                            </div>
                            <div class="snapshot__stats">
                                <div>
                                    <div class="snapshot__label">"Containers"</div>
                                    <div>"24"</div>
                                </div>
                                <div>
                                    <div class="snapshot__label">"Weight"</div>
                                    <div>"12.4t"</div>
                                </div>
                                <div>
                                    <div class="snapshot__label">"Status"</div>
                                    <div>"On schedule"</div>
                                </div>
                            </div>
                        </Card>
                    </div>
                </section>

                <section class="landing__metrics">
                    <h3>"Our impact in numbers"</h3>
                    <div class="landing__metric-grid">
                        <div class="landing__metric">
                            <div class="landing__metric-value">"1,200+"</div>
                            <div>"Shipments handled"</div>
                        </div>
                        <div class="landing__metric">
                            <div class="landing__metric-value">"99.2%"</div>
                            <div>"On-time delivery rate"</div>
                        </div>
                        <div class="landing__metric">
                            <div class="landing__metric-value">"50+"</div>
                            <div>"Logistics partners"</div>
                        </div>
                    </div>
                </section>

                <footer class="landing__footer">
                    <div>{format!("© {} Meridian Cargo and Logistics. All rights reserved.", current_year())}</div>
                    <div class="landing__footer-links">
                        <a href="/login">"Sign in"</a>
                        <a href="/signup">"Get started"</a>
                    </div>
                </footer>
            </main>
        </div>
    }
}
