use yew::prelude::*;

struct Testimonial {
    name: &'static str,
    role: &'static str,
    content: &'static str,
    image: &'static str,
}

const TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        name: "Sarah Johnson",
        role: "CEO at TechCorp",
        content: "BoltSaaS has transformed how we manage our team operations. The analytics are incredible!",
        image: "https://images.unsplash.com/photo-1494790108377-be9c29b29330?auto=format&fit=crop&w=100&h=100&q=80",
    },
    Testimonial {
        name: "Michael Chen",
        role: "CTO at StartupX",
        content: "The security features and collaboration tools are exactly what we needed for our growing team.",
        image: "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?auto=format&fit=crop&w=100&h=100&q=80",
    },
    Testimonial {
        name: "Emily Davis",
        role: "Product Manager",
        content: "Outstanding platform with exceptional support. It's been a game-changer for our workflow.",
        image: "https://images.unsplash.com/photo-1438761681033-6461ffad8d80?auto=format&fit=crop&w=100&h=100&q=80",
    },
];

#[function_component(TestimonialsSection)]
pub fn testimonials_section() -> Html {
    let testimonials_css = r#"
    .testimonials-section {
        padding: 6rem 2rem;
        max-width: 1200px;
        margin: 0 auto;
    }
    .testimonials-grid {
        display: grid;
        grid-template-columns: repeat(auto-fit, minmax(300px, 1fr));
        gap: 2rem;
    }
    .testimonial-card {
        background: var(--card-bg);
        border: 1px solid var(--card-border);
        border-radius: 12px;
        padding: 1.75rem;
        transition: transform 0.3s ease;
    }
    .testimonial-card:hover {
        transform: scale(1.03);
    }
    .testimonial-author {
        display: flex;
        align-items: center;
        gap: 1rem;
        margin-bottom: 1rem;
    }
    .testimonial-author img {
        width: 48px;
        height: 48px;
        border-radius: 50%;
        object-fit: cover;
    }
    .testimonial-author .author-name {
        font-weight: 600;
        margin: 0;
    }
    .testimonial-author .author-role {
        color: var(--text-muted);
        font-size: 0.875rem;
        margin: 0;
    }
    .testimonial-card .quote {
        color: var(--text-muted);
        line-height: 1.6;
        margin: 0;
    }
    "#;

    html! {
        <section class="testimonials-section" id="testimonials">
            <style>{testimonials_css}</style>
            <div class="section-intro">
                <h2>{"Trusted by Leaders"}</h2>
            </div>
            <div class="testimonials-grid">
                { for TESTIMONIALS.iter().map(|testimonial| html! {
                    <div class="testimonial-card">
                        <div class="testimonial-author">
                            <img src={testimonial.image} alt={testimonial.name} loading="lazy" />
                            <div>
                                <p class="author-name">{testimonial.name}</p>
                                <p class="author-role">{testimonial.role}</p>
                            </div>
                        </div>
                        <p class="quote">{testimonial.content}</p>
                    </div>
                })}
            </div>
        </section>
    }
}
