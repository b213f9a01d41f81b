//! Demo catalog: the users, posts, and comment threads the in-memory
//! repository serves. Post content is pre-rendered markup carried verbatim.

use std::collections::HashMap;

use quill_core::domain::{Comment, Post, User};

/// The three demo authors.
pub fn users() -> Vec<User> {
    vec![
        User {
            id: "1".to_string(),
            name: "Alex Johnson".to_string(),
            email: "alex@example.com".to_string(),
            avatar_url: "https://i.pravatar.cc/150?img=1".to_string(),
            bio: "UX Designer and tech enthusiast. Writing about design systems and user experiences.".to_string(),
            joined_date: "January 2023".to_string(),
        },
        User {
            id: "2".to_string(),
            name: "Sarah Williams".to_string(),
            email: "sarah@example.com".to_string(),
            avatar_url: "https://i.pravatar.cc/150?img=5".to_string(),
            bio: "Software engineer with a passion for React and modern web technologies.".to_string(),
            joined_date: "March 2023".to_string(),
        },
        User {
            id: "3".to_string(),
            name: "Michael Chen".to_string(),
            email: "michael@example.com".to_string(),
            avatar_url: "https://i.pravatar.cc/150?img=3".to_string(),
            bio: "Product manager and minimalist. I write about productivity and design.".to_string(),
            joined_date: "February 2023".to_string(),
        },
    ]
}

/// The viewer simulated as logged in.
pub fn current_user() -> User {
    users().remove(0)
}

/// The demo post catalog, in publication order.
pub fn posts() -> Vec<Post> {
    let authors = users();
    vec![
        Post {
            id: "1".to_string(),
            title: "The Future of Minimalist Design in Digital Products".to_string(),
            excerpt: "How simplicity and clean aesthetics are shaping tomorrow's digital experiences.".to_string(),
            content: r#"
      <p>Minimalism has always been at the heart of great design. In the digital world, it takes on new meaning as we balance complex functionality with clean, intuitive interfaces.</p>

      <p>The core principles of minimalist design include:</p>
      <ul>
        <li>Removing unnecessary elements</li>
        <li>Focusing on typography and whitespace</li>
        <li>Using subtle animations to guide users</li>
        <li>Prioritizing content over decoration</li>
      </ul>

      <p>As we move forward, we're seeing a shift towards what I call "functional minimalism" - where the minimalist aesthetic serves to highlight and enhance functionality rather than simply looking clean for its own sake.</p>

      <h2>The Role of Animation</h2>
      <p>Subtle animations play a crucial role in modern minimalist interfaces. They provide feedback, guide attention, and add a layer of polish that elevates the entire experience.</p>

      <h2>Typography as a Foundation</h2>
      <p>With fewer visual elements, typography becomes even more important. Careful font selection, sizing, and spacing can create hierarchy and guide users through content naturally.</p>

      <p>The future of minimalist design isn't about removing everything - it's about being intentional with every element we include.</p>
    "#.to_string(),
            author: authors[0].clone(),
            published_date: "May 15, 2023".to_string(),
            read_time: 5,
            image_url: "https://images.unsplash.com/photo-1499951360447-b19be8fe80f5?q=80&w=2070".to_string(),
            likes: 248,
            comments: 42,
            tags: vec!["Design".to_string(), "Minimalism".to_string(), "UX".to_string()],
            category: "Design".to_string(),
        },
        Post {
            id: "2".to_string(),
            title: "Building Scalable React Applications in 2023".to_string(),
            excerpt: "Modern architecture patterns for maintainable and performant React applications.".to_string(),
            content: r#"
      <p>As React applications grow in complexity, maintaining scalable architecture becomes increasingly important.</p>

      <p>In this article, I'll share the architecture patterns that have proven effective across dozens of enterprise React applications.</p>

      <h2>Component Organization</h2>
      <p>Organizing components by feature rather than type has significant benefits as applications scale. This approach aligns with how teams work and how features evolve.</p>

      <h2>State Management Strategies</h2>
      <p>The debate between global state libraries and React's built-in state management continues, but a hybrid approach often works best:</p>
      <ul>
        <li>Local component state for UI-specific states</li>
        <li>Context API for shared state within feature boundaries</li>
        <li>Dedicated state management for truly global state</li>
      </ul>

      <h2>Performance Optimization</h2>
      <p>Beyond the usual memoization techniques, architectural decisions like code-splitting and lazy loading at the feature level can dramatically improve perceived performance.</p>

      <p>Building scalable React applications is less about specific libraries and more about consistent patterns and principles.</p>
    "#.to_string(),
            author: authors[1].clone(),
            published_date: "June 23, 2023".to_string(),
            read_time: 8,
            image_url: "https://images.unsplash.com/photo-1633356122544-f134324a6cee?q=80&w=2070".to_string(),
            likes: 324,
            comments: 56,
            tags: vec!["React".to_string(), "JavaScript".to_string(), "Architecture".to_string()],
            category: "Development".to_string(),
        },
        Post {
            id: "3".to_string(),
            title: "The Subtle Art of Product Prioritization".to_string(),
            excerpt: "How to decide what to build next when everything seems important.".to_string(),
            content: r#"
      <p>Product prioritization is perhaps the most challenging aspect of product management - and the most important.</p>

      <p>In a world of limited resources and unlimited ideas, choosing what to build next separates successful products from those that flounder.</p>

      <h2>Beyond RICE and MoSCoW</h2>
      <p>While frameworks like RICE (Reach, Impact, Confidence, Effort) and MoSCoW (Must have, Should have, Could have, Won't have) provide useful structure, they're just starting points.</p>

      <p>Effective prioritization requires deeper thinking:</p>
      <ul>
        <li>Understanding true user problems vs. requested features</li>
        <li>Identifying strategic leverage points in your product</li>
        <li>Balancing short-term wins with long-term investments</li>
        <li>Building alignment across stakeholders with different priorities</li>
      </ul>

      <h2>Data-Informed, Not Data-Driven</h2>
      <p>Data should inform prioritization but never drive it completely. The most transformative features often have no historical data to support them.</p>

      <h2>The Opportunity Cost Mindset</h2>
      <p>Perhaps most importantly, prioritization is about opportunity cost. Every "yes" means saying "no" or "not yet" to many other options.</p>

      <p>Embracing this reality - and communicating it transparently - builds trust even when stakeholders don't get their preferred features immediately.</p>
    "#.to_string(),
            author: authors[2].clone(),
            published_date: "July 5, 2023".to_string(),
            read_time: 6,
            image_url: "https://images.unsplash.com/photo-1455849318743-b2233052fcff?q=80&w=2069".to_string(),
            likes: 182,
            comments: 28,
            tags: vec!["Product Management".to_string(), "Strategy".to_string(), "Decision Making".to_string()],
            category: "Product".to_string(),
        },
        Post {
            id: "4".to_string(),
            title: "Typography Fundamentals Every Designer Should Master".to_string(),
            excerpt: "Essential principles for creating readable, beautiful text in digital products.".to_string(),
            content: r#"
      <p>Typography forms the foundation of digital design, yet it's often overlooked in favor of more flashy elements.</p>

      <p>Mastering these typography fundamentals will instantly elevate your designs:</p>

      <h2>Hierarchy Through Contrast</h2>
      <p>Creating clear hierarchy is about meaningful contrast - not just in size, but in weight, spacing, and sometimes color. Each level should be clearly distinguishable at a glance.</p>

      <h2>Readability vs. Legibility</h2>
      <p>Legibility refers to how easily individual characters can be distinguished; readability is about the comfort of reading entire text blocks. Both matter, but in different contexts.</p>

      <h2>The Magic of Line Height</h2>
      <p>Proper line height (leading) creates comfortable reading rhythm. For body text, aim for line height that's 1.5-1.6 times your font size.</p>

      <h2>Responsive Typography</h2>
      <p>Text should adapt not just to screen size but to reading distance. Mobile devices are held closer, requiring different typography treatment beyond simple scaling.</p>

      <p>Typography isn't just about making text look good - it's about serving readers and communicating with clarity.</p>
    "#.to_string(),
            author: authors[0].clone(),
            published_date: "August 12, 2023".to_string(),
            read_time: 5,
            image_url: "https://images.unsplash.com/photo-1563206767-5b18f218e8de?q=80&w=2069".to_string(),
            likes: 156,
            comments: 22,
            tags: vec!["Typography".to_string(), "Design".to_string(), "UX".to_string()],
            category: "Design".to_string(),
        },
    ]
}

/// Comment threads keyed by post id, in stored order.
pub fn comments() -> HashMap<String, Vec<Comment>> {
    let authors = users();
    let mut map = HashMap::new();

    map.insert(
        "1".to_string(),
        vec![
            Comment {
                id: "c1".to_string(),
                content: "Great article! I've been thinking about this a lot lately in my own design work.".to_string(),
                author: authors[1].clone(),
                published_date: "May 16, 2023".to_string(),
                likes: 5,
            },
            Comment {
                id: "c2".to_string(),
                content: "I agree with most points, but I think there's still room for more decorative elements when they serve a purpose.".to_string(),
                author: authors[2].clone(),
                published_date: "May 17, 2023".to_string(),
                likes: 3,
            },
        ],
    );

    map.insert(
        "2".to_string(),
        vec![Comment {
            id: "c3".to_string(),
            content: "This helped me rethink how I'm structuring my current project. Thanks for sharing!".to_string(),
            author: authors[0].clone(),
            published_date: "June 24, 2023".to_string(),
            likes: 8,
        }],
    );

    map.insert(
        "3".to_string(),
        vec![
            Comment {
                id: "c4".to_string(),
                content: "The opportunity cost mindset has been game-changing for our team. Wish I'd learned this earlier in my career.".to_string(),
                author: authors[1].clone(),
                published_date: "July 6, 2023".to_string(),
                likes: 4,
            },
            Comment {
                id: "c5".to_string(),
                content: "Do you have any suggestions for getting stakeholders to understand opportunity cost when they're pushing for their features?".to_string(),
                author: authors[0].clone(),
                published_date: "July 7, 2023".to_string(),
                likes: 2,
            },
        ],
    );

    map
}
