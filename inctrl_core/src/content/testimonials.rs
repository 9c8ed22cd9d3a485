/// Client quote.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Testimonial {
    /// Quote text, without surrounding quotation marks.
    pub quote: &'static str,
    /// Who said it.
    pub author: &'static str,
    /// Their job title.
    pub role: &'static str,
    /// Their employer.
    pub company: &'static str,
    /// Star rating, 1 to 5.
    pub rating: u8,
}

impl Testimonial {
    /// Number of stars to draw.
    pub fn stars(&self) -> usize {
        usize::from(self.rating.clamp(1, 5))
    }

    /// `"Role, Company"` attribution line.
    pub fn attribution(&self) -> String {
        format!("{}, {}", self.role, self.company)
    }
}

/// Testimonial carousel items, in display order.
pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        quote: "InCtrl transformed our entire office. They installed our security cameras, structured cabling, and conference room AV all in one project. No need to coordinate multiple vendors!",
        author: "James Mitchell",
        role: "Operations Manager",
        company: "Orlando Tech Solutions",
        rating: 5,
    },
    Testimonial {
        quote: "We've reduced our downtime significantly since partnering with InCtrl. Their team responds fast and knows exactly what they're doing.",
        author: "Maria Santos",
        role: "IT Director",
        company: "Central Florida Medical Group",
        rating: 5,
    },
    Testimonial {
        quote: "The digital signage installation was flawless. Our customers love the new menu boards and we can update content remotely. Great team to work with.",
        author: "David Chen",
        role: "Restaurant Owner",
        company: "Fusion Kitchen Orlando",
        rating: 5,
    },
    Testimonial {
        quote: "Professional, punctual, and their work is top quality. They've handled all our warehouse security installations across multiple locations.",
        author: "Lisa Rodriguez",
        role: "Facilities Manager",
        company: "Southeast Distribution Co.",
        rating: 5,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stars_are_clamped() {
        let mut t = TESTIMONIALS[0];
        t.rating = 0;
        assert_eq!(t.stars(), 1);
        t.rating = 9;
        assert_eq!(t.stars(), 5);
        t.rating = 3;
        assert_eq!(t.stars(), 3);
    }

    #[test]
    fn attribution_joins_role_and_company() {
        assert_eq!(
            TESTIMONIALS[1].attribution(),
            "IT Director, Central Florida Medical Group"
        );
    }
}
