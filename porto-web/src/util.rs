use chrono::Utc;
use porto_client::api::Time;
use wasm_bindgen::prelude::*;

#[wasm_bindgen(inline_js = "
    export function spawn_particles() {
        document.querySelectorAll('.particle').forEach((p) => p.remove());
        const count = Math.floor(window.innerWidth / 20);
        for (let i = 0; i < count; i++) {
            const p = document.createElement('div');
            p.classList.add('particle');
            const size = Math.random() * 4 + 2;
            p.style.width = size + 'px';
            p.style.height = size + 'px';
            p.style.left = (Math.random() * 100) + 'vw';
            p.style.top = (Math.random() * 100) + 'vh';
            p.style.opacity = (Math.random() * 0.5 + 0.1);
            document.body.appendChild(p);
        }
    }
    export function clear_particles() {
        document.querySelectorAll('.particle').forEach((p) => p.remove());
    }
")]
extern "C" {
    /// Scatter the decorative background particles, replacing any previous
    /// batch. Particle count scales with the viewport width.
    pub fn spawn_particles();
    pub fn clear_particles();
}

pub async fn sleep_for(d: chrono::Duration) {
    wasm_timer::Delay::new(d.to_std().unwrap_or(std::time::Duration::from_secs(0)))
        .await
        .expect("failed sleeping")
}

/// Relative-age label for a comment timestamp.
pub fn format_age(t: Time) -> String {
    let diff = Utc::now().signed_duration_since(t);
    let days = diff.num_days();
    if days <= 0 {
        let hours = diff.num_hours();
        if hours <= 0 {
            let minutes = diff.num_minutes();
            match minutes <= 0 {
                true => String::from("Just now"),
                false => format!("{} minutes ago", minutes),
            }
        } else {
            format!("{} hours ago", hours)
        }
    } else if days == 1 {
        String::from("Yesterday")
    } else if days < 7 {
        format!("{} days ago", days)
    } else {
        t.format("%B %-d, %Y").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn relative_ages() {
        let now = Utc::now();
        assert_eq!(format_age(now), "Just now");
        assert_eq!(format_age(now - Duration::minutes(5)), "5 minutes ago");
        assert_eq!(format_age(now - Duration::hours(3)), "3 hours ago");
        assert_eq!(format_age(now - Duration::days(1)), "Yesterday");
        assert_eq!(format_age(now - Duration::days(4)), "4 days ago");
    }

    #[test]
    fn old_comments_get_a_full_date() {
        let old = Utc::now() - Duration::days(60);
        assert!(format_age(old).contains(&old.format("%Y").to_string()));
    }

    #[test]
    fn future_timestamps_clamp_to_just_now() {
        assert_eq!(format_age(Utc::now() + Duration::minutes(2)), "Just now");
    }
}
