use leptos::prelude::*;

#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <div class="page landing-page">
            <h2 class="landing-title">
                <span class="accent">"Potato Disease"</span>
                <br />
                "Detection System"
            </h2>
            <p class="page-description">
                "Protect your crops. Upload a leaf photo and get an instant diagnosis with a confidence score."
            </p>

            <div class="card-grid">
                <div class="card">
                    <h3>"Instant Analysis"</h3>
                    <p>"Get results in seconds from the classification model"</p>
                </div>
                <div class="card">
                    <h3>"High Accuracy"</h3>
                    <p>"Trained on thousands of images for reliable detection"</p>
                </div>
                <div class="card">
                    <h3>"Early Detection"</h3>
                    <p>"Catch diseases early to prevent crop loss"</p>
                </div>
            </div>

            <a href="/detect" class="btn btn-primary btn-cta">"Start Detection"</a>

            <div class="how-it-works">
                <h3>"Detects"</h3>
                <div class="steps">
                    <div class="step">
                        <span class="step-number status-early">"1"</span>
                        <div class="step-content">
                            <strong>"Early Blight"</strong>
                        </div>
                    </div>
                    <div class="step">
                        <span class="step-number status-late">"2"</span>
                        <div class="step-content">
                            <strong>"Late Blight"</strong>
                        </div>
                    </div>
                    <div class="step">
                        <span class="step-number status-healthy">"3"</span>
                        <div class="step-content">
                            <strong>"Healthy"</strong>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
